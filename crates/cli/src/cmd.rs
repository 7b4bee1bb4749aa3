use std::{
  fmt::Write as _,
  fs::File,
  io::{self, Read, Write},
  path::Path,
};

use anycrc::{BitwiseCrc, CHECK_INPUT, Checksum, ChecksumReader, ParameterSet, TableCrc, catalog};
use eyre::{OptionExt, Result, WrapErr, bail};

use crate::{args::Engine, encoding::Encoding};

const READ_CHUNK: usize = 4096;

pub fn lookup(name: &str) -> Result<ParameterSet> {
  catalog::by_name(name.trim()).ok_or_eyre(format!("{name} not found"))
}

/// Markdown table of the catalog, sorted by width then name.
pub fn list() -> String {
  let mut entries = catalog::ALL.to_vec();
  entries.sort_by(|a, b| a.width().cmp(&b.width()).then_with(|| a.name().cmp(b.name())));

  let mut out = String::new();
  out.push_str("| name | poly | check | init | refin | refout | xorout |\n");
  out.push_str("| :--- | :--- | :--- | :--- | :--- | :--- | :--- |\n");
  for p in entries {
    let _ = writeln!(
      out,
      "| {} | {:#x} | {:#x} | {:#x} | {} | {} | {:#x} |",
      p.name(),
      p.poly(),
      p.check(),
      p.init(),
      p.refin(),
      p.refout(),
      p.xorout()
    );
  }
  out
}

/// Matching entries in identifier form, e.g. `CRC_16_XMODEM`.
pub fn search(fragment: &str) -> Vec<String> {
  catalog::search(fragment.trim()).map(|p| identifier(p.name())).collect()
}

/// `CRC-16/XMODEM` -> `CRC_16_XMODEM`. Resolves back through `catalog::by_name`.
fn identifier(name: &str) -> String {
  name.chars().map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' }).collect()
}

pub fn string(engine: Engine, name: &str, encoding: Encoding, input: &str) -> Result<u64> {
  let params = lookup(name)?;
  let data = encoding.encode(input)?;
  tracing::info!(name = params.name(), encoding = encoding.label(), input, "computing");
  Ok(engine.checksum(params, &data))
}

pub fn file(engine: Engine, name: &str, path: &Path) -> Result<u64> {
  let params = lookup(name)?;
  let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
  tracing::info!(name = params.name(), path = %path.display(), "computing");
  let crc = match engine {
    Engine::Bitwise => stream(file, BitwiseCrc::new(params)),
    Engine::Table => stream(file, TableCrc::new(params)),
  };
  crc.wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Feed `reader` through `engine` in fixed-size reads.
pub fn stream<R: Read, C: Checksum>(reader: R, engine: C) -> io::Result<u64> {
  let mut reader = ChecksumReader::new(reader, engine);
  let mut buf = [0u8; READ_CHUNK];
  loop {
    match reader.read(&mut buf) {
      Ok(0) => return Ok(reader.crc()),
      Ok(_) => {}
      Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
      Err(err) => return Err(err),
    }
  }
}

/// Verify every catalog entry on both engines, reporting failures to `out`.
pub fn check(out: &mut impl Write) -> Result<()> {
  if let Err(err) = catalog::verify_all() {
    writeln!(out, "bitwise: {err}")?;
    bail!("catalog self-test failed: {err}");
  }

  let mut failures = 0usize;
  for &params in catalog::ALL {
    let computed = TableCrc::checksum(params, CHECK_INPUT);
    if computed != params.check() {
      writeln!(out, "table: {} expected {:x} calculated {computed:x}", params.name(), params.check())?;
      failures += 1;
    }
  }
  if failures > 0 {
    bail!("{failures} catalog entries failed on the table engine");
  }

  writeln!(out, "{} parameter sets verified on both engines", catalog::ALL.len())?;
  Ok(())
}

pub fn identify(width: u8, poly: u64, check: u64) -> Result<ParameterSet> {
  catalog::find_by(width, poly, check)
    .ok_or_eyre(format!("no catalog entry with width={width} poly={poly:#x} check={check:#x}"))
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn list_is_sorted_markdown() {
    let table = list();
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("| name | poly | check | init | refin | refout | xorout |"));
    assert_eq!(lines.next(), Some("| :--- | :--- | :--- | :--- | :--- | :--- | :--- |"));
    assert_eq!(lines.next(), Some("| CRC-3/GSM | 0x3 | 0x4 | 0x0 | false | false | 0x7 |"));
    assert_eq!(table.lines().count(), catalog::ALL.len() + 2);
    assert!(table.lines().last().unwrap().starts_with("| CRC-64/XZ |"));
  }

  #[test]
  fn string_scenarios() {
    assert_eq!(string(Engine::Table, "CRC-16/XMODEM", Encoding::Ascii, "123456789").unwrap(), 0x31C3);
    assert_eq!(string(Engine::Bitwise, "crc_32_iso_hdlc", Encoding::Hex, "313233343536373839").unwrap(), 0xCBF4_3926);
    assert!(string(Engine::Table, "CRC-99/NOPE", Encoding::Utf8, "x").is_err());
  }

  #[test]
  fn search_prints_identifiers() {
    assert_eq!(search("  16/xmodem "), ["CRC_16_XMODEM"]);
    assert!(search("zzz").is_empty());
    for id in search("") {
      assert!(id.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'), "{id}");
      assert_eq!(identifier(lookup(&id).unwrap().name()), id);
    }
    assert_eq!(search("").len(), catalog::ALL.len());
  }

  #[test]
  fn stream_crosses_chunk_boundaries() {
    let data: Vec<u8> = (0..3 * READ_CHUNK + 17).map(|i| (i % 253) as u8).collect();
    let params = catalog::CRC_32_ISCSI;
    let expected = BitwiseCrc::checksum(&params, &data);
    assert_eq!(stream(Cursor::new(&data), TableCrc::new(params)).unwrap(), expected);
    assert_eq!(stream(Cursor::new(&data), BitwiseCrc::new(params)).unwrap(), expected);
  }

  #[test]
  fn check_reports_success() {
    let mut out = Vec::new();
    check(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("verified on both engines"));
  }

  #[test]
  fn identify_known_and_unknown() {
    assert_eq!(identify(8, 0xD5, 0xBC).unwrap(), catalog::CRC_8_DVB_S2);
    let err = identify(8, 0xD5, 0x00).unwrap_err();
    assert_eq!(err.to_string(), "no catalog entry with width=8 poly=0xd5 check=0x0");
  }
}
