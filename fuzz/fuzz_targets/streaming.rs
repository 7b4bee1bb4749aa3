//! Fuzz target for arbitrary parameter sets and update splits.
//!
//! The table engine, fed in arbitrary chunks, must match the bitwise engine
//! fed in one call.

#![no_main]

use anycrc::{BitwiseCrc, ParameterSet, TableCrc};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let Ok(params) = ParameterSet::new(
    "fuzz",
    input.width,
    input.poly,
    input.init,
    input.refin,
    input.refout,
    input.xorout,
    0,
  ) else {
    assert!(input.width == 0 || input.width > 64);
    return;
  };

  let expected = BitwiseCrc::checksum(&params, &input.data);
  assert_eq!(expected & !params.mask(), 0, "value wider than {} bits", params.width());

  let mut table = TableCrc::new(params);
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < input.data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };
    let end = (offset + chunk_size).min(input.data.len());
    table.update(&input.data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(table.value(), expected, "{params}");
});
