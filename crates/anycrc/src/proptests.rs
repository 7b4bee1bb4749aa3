use proptest::prelude::*;

use crate::{BitwiseCrc, ParameterSet, TableCrc, catalog, reflect};

/// Any parameter set, zero polynomial included. `check` is left at zero;
/// these sets are compared engine against engine, never against a declared
/// check.
fn arb_params() -> impl Strategy<Value = ParameterSet> {
  (1u8..=64, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      ParameterSet::new("arbitrary", width, poly, init, refin, refout, xorout, 0).unwrap()
    },
  )
}

fn arb_catalog_entry() -> impl Strategy<Value = ParameterSet> {
  proptest::sample::select(catalog::ALL)
}

proptest! {
  #[test]
  fn engines_agree_with_zero_poly(
    width in 1u8..=64,
    init: u64,
    refin: bool,
    refout: bool,
    data in proptest::collection::vec(any::<u8>(), 0..=64)
  ) {
    let params = ParameterSet::new("zero-poly", width, 0, init, refin, refout, 0, 0).unwrap();
    prop_assert_eq!(TableCrc::checksum(params, &data), BitwiseCrc::checksum(&params, &data));
  }

  #[test]
  fn engines_agree_on_arbitrary_parameters(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    prop_assert_eq!(TableCrc::checksum(params, &data), BitwiseCrc::checksum(&params, &data));
  }

  #[test]
  fn engines_agree_on_catalog(
    params in arb_catalog_entry(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    prop_assert_eq!(TableCrc::checksum(params, &data), BitwiseCrc::checksum(&params, &data));
  }

  #[test]
  fn streaming_matches_oneshot(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    chunk in 1usize..=67
  ) {
    let mut bitwise = BitwiseCrc::new(params);
    let mut table = TableCrc::new(params);
    for part in data.chunks(chunk) {
      bitwise.update(part);
      table.update(part);
    }
    let expected = BitwiseCrc::checksum(&params, &data);
    prop_assert_eq!(bitwise.value(), expected);
    prop_assert_eq!(table.value(), expected);
  }

  #[test]
  fn value_fits_width(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=64)
  ) {
    prop_assert_eq!(BitwiseCrc::checksum(&params, &data) & !params.mask(), 0);
    prop_assert_eq!(TableCrc::checksum(params, &data) & !params.mask(), 0);
  }

  #[test]
  fn reflect_is_an_involution(value in any::<u64>(), width in 1u8..=64) {
    let v = value & (u64::MAX >> (64 - u32::from(width)));
    prop_assert_eq!(reflect::reverse(reflect::reverse(v, width), width), v);
  }

  #[test]
  fn reset_then_update_matches_fresh(
    params in arb_params(),
    noise in proptest::collection::vec(any::<u8>(), 0..=32),
    data in proptest::collection::vec(any::<u8>(), 0..=64)
  ) {
    let mut table = TableCrc::new(params);
    table.update(&noise);
    table.reset();
    table.update(&data);
    prop_assert_eq!(table.value(), TableCrc::checksum(params, &data));
  }
}

