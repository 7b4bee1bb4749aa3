//! Basic usage: named algorithms, custom parameters, both engines.
//!
//! Run with: `cargo run --example basic -p anycrc`

use anycrc::{BitwiseCrc, Checksum, CrcError, ParameterSet, TableCrc, catalog, fixed::Crc16Xmodem};

fn main() -> Result<(), CrcError> {
  println!("=== anycrc Basic Examples ===\n");

  named_algorithms();
  custom_algorithm()?;
  streaming();
  Ok(())
}

fn named_algorithms() {
  println!("--- Named Algorithms ---\n");

  let data = b"123456789";
  for params in [catalog::CRC_16_XMODEM, catalog::CRC_32_ISO_HDLC, catalog::CRC_64_XZ] {
    let crc = TableCrc::checksum(params, data);
    println!("{:<16} 0x{crc:X}", params.name());
    assert_eq!(crc, params.check());
  }

  // The hand-rolled engine agrees with the generic one.
  assert_eq!(u64::from(Crc16Xmodem::checksum(data)), catalog::CRC_16_XMODEM.check());
  println!();
}

/// Any algorithm can be described directly; this one is not in the catalog.
fn custom_algorithm() -> Result<(), CrcError> {
  println!("--- Custom Algorithm ---\n");

  let sata = ParameterSet::new("CRC-32/SATA", 32, 0x04C1_1DB7, 0x5232_5032, false, false, 0, 0xCF72_AFE8)?;
  sata.self_test()?;
  println!("{sata}");

  let mut crc = anycrc::make_table_engine(sata);
  crc.update(b"Hello World!");
  println!("crc(hex)={:x}", crc.value());
  println!();
  Ok(())
}

fn streaming() {
  println!("--- Streaming ---\n");

  let mut bitwise = BitwiseCrc::new(catalog::CRC_8_DVB_S2);
  let mut table = TableCrc::new(catalog::CRC_8_DVB_S2);
  for chunk in [&b"1234"[..], b"5", b"6789"] {
    bitwise.update(chunk);
    table.update(chunk);
  }
  println!("bitwise 0x{:02X}, table 0x{:02X}", bitwise.value(), table.value());
  assert_eq!(bitwise.value(), table.value());

  table.reset();
  println!("after reset: 0x{:02X}", table.digest(b"123456789"));
}
