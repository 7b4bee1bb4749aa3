//! Differential fuzzing against reference implementations.
//!
//! Both engines are compared against `crc` and `crc32fast` for a handful of
//! widths and reflection modes.

#![no_main]

use anycrc::{BitwiseCrc, ParameterSet, TableCrc, catalog};
use crc::Crc;
use libfuzzer_sys::fuzz_target;

const CRC32: Crc<u32> = Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC64: Crc<u64> = Crc::<u64>::new(&crc::CRC_64_XZ);
const CRC16: Crc<u16> = Crc::<u16>::new(&crc::CRC_16_XMODEM);
const CRC12: Crc<u16> = Crc::<u16>::new(&crc::CRC_12_UMTS);
const CRC5: Crc<u8> = Crc::<u8>::new(&crc::CRC_5_USB);

fuzz_target!(|data: &[u8]| {
  check(catalog::CRC_32_ISO_HDLC, data, u64::from(CRC32.checksum(data)));
  check(catalog::CRC_32_ISO_HDLC, data, u64::from(crc32fast::hash(data)));
  check(catalog::CRC_64_XZ, data, CRC64.checksum(data));
  check(catalog::CRC_16_XMODEM, data, u64::from(CRC16.checksum(data)));
  check(catalog::CRC_12_UMTS, data, u64::from(CRC12.checksum(data)));
  check(catalog::CRC_5_USB, data, u64::from(CRC5.checksum(data)));
});

fn check(params: ParameterSet, data: &[u8], reference: u64) {
  let table = TableCrc::checksum(params, data);
  let bitwise = BitwiseCrc::checksum(&params, data);
  assert_eq!(
    table,
    reference,
    "{} table mismatch: ours={table:#x}, reference={reference:#x}, len={}",
    params.name(),
    data.len()
  );
  assert_eq!(bitwise, reference, "{} bitwise mismatch, len={}", params.name(), data.len());
}
