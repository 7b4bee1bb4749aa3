//! Differential tests against independent CRC implementations.

use anycrc::{BitwiseCrc, ParameterSet, TableCrc, catalog};
use crc::Crc;

mod common;

use common::gen_bytes;

const LENGTHS: [usize; 8] = [0, 1, 5, 16, 255, 256, 1000, 4096];

fn assert_matches(ours: ParameterSet, reference: impl Fn(&[u8]) -> u64) {
  for (seed, len) in LENGTHS.into_iter().enumerate() {
    let data = gen_bytes(len, seed as u64 + 1);
    let expected = reference(&data);
    assert_eq!(TableCrc::checksum(ours, &data), expected, "table {} len={len}", ours.name());
    assert_eq!(BitwiseCrc::checksum(&ours, &data), expected, "bitwise {} len={len}", ours.name());
  }
}

macro_rules! against_crc_crate {
  ($($test:ident: $width:ty => $alg:ident),* $(,)?) => {
    $(
      #[test]
      fn $test() {
        let alg = &crc::$alg;
        let ours = catalog::$alg;
        assert_eq!(u64::from(alg.poly), ours.poly());
        assert_eq!(u64::from(alg.init), ours.init());
        assert_eq!(u64::from(alg.xorout), ours.xorout());
        assert_eq!(u64::from(alg.check), ours.check());
        assert_eq!((alg.refin, alg.refout), (ours.refin(), ours.refout()));

        let reference = Crc::<$width>::new(alg);
        assert_matches(ours, |data| u64::from(reference.checksum(data)));
      }
    )*
  };
}

against_crc_crate! {
  crc_3_gsm: u8 => CRC_3_GSM,
  crc_3_rohc: u8 => CRC_3_ROHC,
  crc_5_usb: u8 => CRC_5_USB,
  crc_7_mmc: u8 => CRC_7_MMC,
  crc_8_smbus: u8 => CRC_8_SMBUS,
  crc_8_dvb_s2: u8 => CRC_8_DVB_S2,
  crc_10_atm: u16 => CRC_10_ATM,
  crc_12_umts: u16 => CRC_12_UMTS,
  crc_15_can: u16 => CRC_15_CAN,
  crc_16_xmodem: u16 => CRC_16_XMODEM,
  crc_16_kermit: u16 => CRC_16_KERMIT,
  crc_16_modbus: u16 => CRC_16_MODBUS,
  crc_17_can_fd: u32 => CRC_17_CAN_FD,
  crc_21_can_fd: u32 => CRC_21_CAN_FD,
  crc_24_openpgp: u32 => CRC_24_OPENPGP,
  crc_24_ble: u32 => CRC_24_BLE,
  crc_31_philips: u32 => CRC_31_PHILIPS,
  crc_32_iso_hdlc: u32 => CRC_32_ISO_HDLC,
  crc_32_iscsi: u32 => CRC_32_ISCSI,
  crc_32_bzip2: u32 => CRC_32_BZIP2,
  crc_40_gsm: u64 => CRC_40_GSM,
  crc_64_xz: u64 => CRC_64_XZ,
  crc_64_ecma_182: u64 => CRC_64_ECMA_182,
  crc_64_go_iso: u64 => CRC_64_GO_ISO,
  crc_64_redis: u64 => CRC_64_REDIS,
}

#[test]
fn crc32fast_agrees_with_iso_hdlc() {
  assert_matches(catalog::CRC_32_ISO_HDLC, |data| u64::from(crc32fast::hash(data)));
}

#[test]
fn crc32fast_streaming_agrees() {
  let data = gen_bytes(10_000, 99);
  let mut reference = crc32fast::Hasher::new();
  let mut ours = TableCrc::new(catalog::CRC_32_ISO_HDLC);
  for chunk in data.chunks(333) {
    reference.update(chunk);
    ours.update(chunk);
  }
  assert_eq!(ours.value(), u64::from(reference.finalize()));
}
