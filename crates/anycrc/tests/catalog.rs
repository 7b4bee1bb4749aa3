//! Every named algorithm, on both engines.

use anycrc::{BitwiseCrc, CHECK_INPUT, Checksum, CrcError, ParameterSet, TableCrc, catalog};

#[test]
fn both_engines_reproduce_every_check_value() {
  for &params in catalog::ALL {
    let bitwise = BitwiseCrc::checksum(&params, CHECK_INPUT);
    let table = TableCrc::checksum(params, CHECK_INPUT);
    assert_eq!(bitwise, params.check(), "bitwise {}", params.name());
    assert_eq!(table, params.check(), "table {}", params.name());
  }
}

#[test]
fn verify_all_passes() {
  catalog::verify_all().unwrap();
  for params in catalog::ALL {
    params.self_test().unwrap();
  }
}

#[test]
fn iso_hdlc_scenario() {
  let params = ParameterSet::new("CRC-32/ISO-HDLC", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926).unwrap();
  assert_eq!(params, catalog::CRC_32_ISO_HDLC);
  assert_eq!(anycrc::make_bitwise_engine(params).digest(CHECK_INPUT), 0xCBF4_3926);
  assert_eq!(anycrc::make_table_engine(params).digest(CHECK_INPUT), 0xCBF4_3926);
}

#[test]
fn xmodem_scenario() {
  let params = ParameterSet::new("CRC-16/XMODEM", 16, 0x1021, 0, false, false, 0, 0x31C3).unwrap();
  assert_eq!(anycrc::make_bitwise_engine(params).digest(CHECK_INPUT), 0x31C3);
  assert_eq!(anycrc::make_table_engine(params).digest(CHECK_INPUT), 0x31C3);
}

#[test]
fn custom_sata_definition() {
  let sata = ParameterSet::new("CRC-32/SATA", 32, 0x04C1_1DB7, 0x5232_5032, false, false, 0, 0xCF72_AFE8).unwrap();
  sata.self_test().unwrap();
  assert_eq!(catalog::find_by(32, 0x04C1_1DB7, 0xCF72_AFE8), None);
}

#[test]
fn wrong_check_is_reported() {
  let typo = catalog::CRC_16_KERMIT;
  let typo = ParameterSet::new(
    "CRC-16/KERMIT-TYPO",
    typo.width(),
    typo.poly(),
    typo.init(),
    typo.refin(),
    typo.refout(),
    typo.xorout(),
    0x2198,
  )
  .unwrap();
  let err = typo.self_test().unwrap_err();
  assert_eq!(
    err,
    CrcError::ChecksumMismatch {
      name: "CRC-16/KERMIT-TYPO",
      expected: 0x2198,
      computed: 0x2189,
    }
  );
  assert_eq!(err.to_string(), "invalid check (CRC-16/KERMIT-TYPO) expected: 2198 calculated: 2189");
}

#[test]
fn identify_by_shape() {
  let found = catalog::find_by(16, 0x8005, 0x4B37).unwrap();
  assert_eq!(found.name(), "CRC-16/MODBUS");

  // A live engine maps back to its named algorithm.
  let engine = TableCrc::new(catalog::CRC_24_FLEXRAY_B);
  let p = engine.parameters();
  assert_eq!(catalog::find_by(p.width(), p.poly(), p.check()), Some(catalog::CRC_24_FLEXRAY_B));
}

#[test]
fn renamed_entries_compute_identically() {
  let alias = catalog::CRC_32_ISCSI.renamed("CRC-32C");
  assert_ne!(alias, catalog::CRC_32_ISCSI);
  assert_eq!(TableCrc::checksum(alias, b"abc"), TableCrc::checksum(catalog::CRC_32_ISCSI, b"abc"));
}
