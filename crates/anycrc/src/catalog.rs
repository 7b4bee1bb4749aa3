//! Named CRC algorithms.
//!
//! Every entry follows the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/all.htm)
//! naming and carries the catalogue's check value. All entries are verified
//! against the bitwise engine at compile time.
//!
//! ```
//! use anycrc::{Checksum, catalog};
//!
//! let p = catalog::by_name("crc-32/iso-hdlc").unwrap();
//! assert_eq!(p, catalog::CRC_32_ISO_HDLC);
//! assert_eq!(anycrc::make_bitwise_engine(p).digest(b"123456789"), 0xCBF4_3926);
//! ```

// Const-context indexing over `ALL` uses bounded loop indices.
#![allow(clippy::indexing_slicing)]

use crate::{CrcError, ParameterSet};

#[allow(clippy::too_many_arguments)]
const fn preset(
  name: &'static str,
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  check: u64,
) -> ParameterSet {
  match ParameterSet::new(name, width, poly, init, refin, refout, xorout, check) {
    Ok(params) => params,
    Err(_) => panic!("malformed catalog entry"),
  }
}

// name, width, poly, init, refin, refout, xorout, check

pub const CRC_3_GSM: ParameterSet = preset("CRC-3/GSM", 3, 0x3, 0, false, false, 0x7, 0x4);
pub const CRC_3_ROHC: ParameterSet = preset("CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0, 0x6);
pub const CRC_4_G_704: ParameterSet = preset("CRC-4/G-704", 4, 0x3, 0, true, true, 0, 0x7);
pub const CRC_4_INTERLAKEN: ParameterSet = preset("CRC-4/INTERLAKEN", 4, 0x3, !0, false, false, !0, 0xB);
pub const CRC_5_USB: ParameterSet = preset("CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19);
pub const CRC_5_EPC_C1G2: ParameterSet = preset("CRC-5/EPC-C1G2", 5, 0x09, 0x09, false, false, 0, 0);
pub const CRC_5_G_704: ParameterSet = preset("CRC-5/G-704", 5, 0x15, 0, true, true, 0, 0x07);
pub const CRC_6_G_704: ParameterSet = preset("CRC-6/G-704", 6, 0x03, 0, true, true, 0, 0x06);
pub const CRC_6_CDMA2000_A: ParameterSet = preset("CRC-6/CDMA2000-A", 6, 0x27, 0x3F, false, false, 0, 0x0D);
pub const CRC_6_CDMA2000_B: ParameterSet = preset("CRC-6/CDMA2000-B", 6, 0x07, 0x3F, false, false, 0, 0x3B);
pub const CRC_6_DARC: ParameterSet = preset("CRC-6/DARC", 6, 0x19, 0, true, true, 0, 0x26);
pub const CRC_6_GSM: ParameterSet = preset("CRC-6/GSM", 6, 0x2F, 0, false, false, 0x3F, 0x13);
pub const CRC_7_MMC: ParameterSet = preset("CRC-7/MMC", 7, 0x09, 0, false, false, 0, 0x75);
pub const CRC_7_UMTS: ParameterSet = preset("CRC-7/UMTS", 7, 0x45, 0, false, false, 0, 0x61);
pub const CRC_7_ROHC: ParameterSet = preset("CRC-7/ROHC", 7, 0x4F, 0x7F, true, true, 0, 0x53);
pub const CRC_8_SMBUS: ParameterSet = preset("CRC-8/SMBUS", 8, 0x07, 0, false, false, 0, 0xF4);
pub const CRC_8_I_432_1: ParameterSet = preset("CRC-8/I-432-1", 8, 0x07, 0, false, false, 0x55, 0xA1);
pub const CRC_8_ROHC: ParameterSet = preset("CRC-8/ROHC", 8, 0x07, !0, true, true, 0, 0xD0);
pub const CRC_8_GSM_A: ParameterSet = preset("CRC-8/GSM-A", 8, 0x1D, 0, false, false, 0, 0x37);
pub const CRC_8_MIFARE_MAD: ParameterSet = preset("CRC-8/MIFARE-MAD", 8, 0x1D, 0xC7, false, false, 0, 0x99);
pub const CRC_8_I_CODE: ParameterSet = preset("CRC-8/I-CODE", 8, 0x1D, 0xFD, false, false, 0, 0x7E);
pub const CRC_8_HITAG: ParameterSet = preset("CRC-8/HITAG", 8, 0x1D, !0, false, false, 0, 0xB4);
pub const CRC_8_SAE_J1850: ParameterSet = preset("CRC-8/SAE-J1850", 8, 0x1D, !0, false, false, !0, 0x4B);
pub const CRC_8_TECH_3250: ParameterSet = preset("CRC-8/TECH-3250", 8, 0x1D, !0, true, true, 0, 0x97);
pub const CRC_8_OPENSAFETY: ParameterSet = preset("CRC-8/OPENSAFETY", 8, 0x2F, 0, false, false, 0, 0x3E);
pub const CRC_8_AUTOSAR: ParameterSet = preset("CRC-8/AUTOSAR", 8, 0x2F, !0, false, false, !0, 0xDF);
pub const CRC_8_MAXIM_DOW: ParameterSet = preset("CRC-8/MAXIM-DOW", 8, 0x31, 0, true, true, 0, 0xA1);
pub const CRC_8_NRSC_5: ParameterSet = preset("CRC-8/NRSC-5", 8, 0x31, !0, false, false, 0, 0xF7);
pub const CRC_8_DARC: ParameterSet = preset("CRC-8/DARC", 8, 0x39, 0, true, true, 0, 0x15);
pub const CRC_8_GSM_B: ParameterSet = preset("CRC-8/GSM-B", 8, 0x49, 0, false, false, !0, 0x94);
pub const CRC_8_LTE: ParameterSet = preset("CRC-8/LTE", 8, 0x9B, 0, false, false, 0, 0xEA);
pub const CRC_8_WCDMA: ParameterSet = preset("CRC-8/WCDMA", 8, 0x9B, 0, true, true, 0, 0x25);
pub const CRC_8_CDMA2000: ParameterSet = preset("CRC-8/CDMA2000", 8, 0x9B, !0, false, false, 0, 0xDA);
pub const CRC_8_BLUETOOTH: ParameterSet = preset("CRC-8/BLUETOOTH", 8, 0xA7, 0, true, true, 0, 0x26);
pub const CRC_8_DVB_S2: ParameterSet = preset("CRC-8/DVB-S2", 8, 0xD5, 0, false, false, 0, 0xBC);
pub const CRC_10_GSM: ParameterSet = preset("CRC-10/GSM", 10, 0x175, 0, false, false, 0x3FF, 0x12A);
pub const CRC_10_ATM: ParameterSet = preset("CRC-10/ATM", 10, 0x233, 0, false, false, 0, 0x199);
pub const CRC_10_CDMA2000: ParameterSet = preset("CRC-10/CDMA2000", 10, 0x3D9, 0x3FF, false, false, 0, 0x233);
pub const CRC_11_UMTS: ParameterSet = preset("CRC-11/UMTS", 11, 0x307, 0, false, false, 0, 0x061);
pub const CRC_11_FLEXRAY: ParameterSet = preset("CRC-11/FLEXRAY", 11, 0x385, 0x01A, false, false, 0, 0x5A3);
pub const CRC_12_DECT: ParameterSet = preset("CRC-12/DECT", 12, 0x80F, 0, false, false, 0, 0xF5B);
pub const CRC_12_UMTS: ParameterSet = preset("CRC-12/UMTS", 12, 0x80F, 0, false, true, 0, 0xDAF);
pub const CRC_12_GSM: ParameterSet = preset("CRC-12/GSM", 12, 0xD31, 0, false, false, !0, 0xB34);
pub const CRC_12_CDMA2000: ParameterSet = preset("CRC-12/CDMA2000", 12, 0xF13, !0, false, false, 0, 0xD4D);
pub const CRC_13_BBC: ParameterSet = preset("CRC-13/BBC", 13, 0x1CF5, 0, false, false, 0, 0x04FA);
pub const CRC_14_DARC: ParameterSet = preset("CRC-14/DARC", 14, 0x0805, 0, true, true, 0, 0x082D);
pub const CRC_14_GSM: ParameterSet = preset("CRC-14/GSM", 14, 0x202D, 0, false, false, 0x3FFF, 0x30AE);
pub const CRC_15_CAN: ParameterSet = preset("CRC-15/CAN", 15, 0x4599, 0, false, false, 0, 0x059E);
pub const CRC_15_MPT1327: ParameterSet = preset("CRC-15/MPT1327", 15, 0x6815, 0, false, false, 0x0001, 0x2566);
pub const CRC_16_DECT_X: ParameterSet = preset("CRC-16/DECT-X", 16, 0x0589, 0, false, false, 0, 0x007F);
pub const CRC_16_DECT_R: ParameterSet = preset("CRC-16/DECT-R", 16, 0x0589, 0, false, false, 0x0001, 0x007E);
pub const CRC_16_NRSC_5: ParameterSet = preset("CRC-16/NRSC-5", 16, 0x080B, !0, true, true, 0, 0xA066);
pub const CRC_16_XMODEM: ParameterSet = preset("CRC-16/XMODEM", 16, 0x1021, 0, false, false, 0, 0x31C3);
pub const CRC_16_GSM: ParameterSet = preset("CRC-16/GSM", 16, 0x1021, 0, false, false, !0, 0xCE3C);
pub const CRC_16_KERMIT: ParameterSet = preset("CRC-16/KERMIT", 16, 0x1021, 0, true, true, 0, 0x2189);
pub const CRC_16_SPI_FUJITSU: ParameterSet = preset("CRC-16/SPI-FUJITSU", 16, 0x1021, 0x1D0F, false, false, 0, 0xE5CC);
pub const CRC_16_TMS37157: ParameterSet = preset("CRC-16/TMS37157", 16, 0x1021, 0x89EC, true, true, 0, 0x26B1);
pub const CRC_16_RIELLO: ParameterSet = preset("CRC-16/RIELLO", 16, 0x1021, 0xB2AA, true, true, 0, 0x63D0);
pub const CRC_16_ISO_IEC_14443_3_A: ParameterSet =
  preset("CRC-16/ISO-IEC-14443-3-A", 16, 0x1021, 0xC6C6, true, true, 0, 0xBF05);
pub const CRC_16_IBM_3740: ParameterSet = preset("CRC-16/IBM-3740", 16, 0x1021, !0, false, false, 0, 0x29B1);
pub const CRC_16_GENIBUS: ParameterSet = preset("CRC-16/GENIBUS", 16, 0x1021, !0, false, false, !0, 0xD64E);
pub const CRC_16_MCRF4XX: ParameterSet = preset("CRC-16/MCRF4XX", 16, 0x1021, !0, true, true, 0, 0x6F91);
pub const CRC_16_IBM_SDLC: ParameterSet = preset("CRC-16/IBM-SDLC", 16, 0x1021, !0, true, true, !0, 0x906E);
pub const CRC_16_PROFIBUS: ParameterSet = preset("CRC-16/PROFIBUS", 16, 0x1DCF, !0, false, false, !0, 0xA819);
pub const CRC_16_EN_13757: ParameterSet = preset("CRC-16/EN-13757", 16, 0x3D65, 0, false, false, !0, 0xC2B7);
pub const CRC_16_DNP: ParameterSet = preset("CRC-16/DNP", 16, 0x3D65, 0, true, true, !0, 0xEA82);
pub const CRC_16_OPENSAFETY_A: ParameterSet = preset("CRC-16/OPENSAFETY-A", 16, 0x5935, 0, false, false, 0, 0x5D38);
pub const CRC_16_OPENSAFETY_B: ParameterSet = preset("CRC-16/OPENSAFETY-B", 16, 0x755B, 0, false, false, 0, 0x20FE);
pub const CRC_16_M17: ParameterSet = preset("CRC-16/M17", 16, 0x5935, !0, false, false, 0, 0x772B);
pub const CRC_16_LJ1200: ParameterSet = preset("CRC-16/LJ1200", 16, 0x6F63, 0, false, false, 0, 0xBDF4);
pub const CRC_16_UMTS: ParameterSet = preset("CRC-16/UMTS", 16, 0x8005, 0, false, false, 0, 0xFEE8);
pub const CRC_16_ARC: ParameterSet = preset("CRC-16/ARC", 16, 0x8005, 0, true, true, 0, 0xBB3D);
pub const CRC_16_MAXIM_DOW: ParameterSet = preset("CRC-16/MAXIM-DOW", 16, 0x8005, 0, true, true, !0, 0x44C2);
pub const CRC_16_DDS_110: ParameterSet = preset("CRC-16/DDS-110", 16, 0x8005, 0x800D, false, false, 0, 0x9ECF);
pub const CRC_16_CMS: ParameterSet = preset("CRC-16/CMS", 16, 0x8005, !0, false, false, 0, 0xAEE7);
pub const CRC_16_MODBUS: ParameterSet = preset("CRC-16/MODBUS", 16, 0x8005, !0, true, true, 0, 0x4B37);
pub const CRC_16_USB: ParameterSet = preset("CRC-16/USB", 16, 0x8005, !0, true, true, !0, 0xB4C8);
pub const CRC_16_T10_DIF: ParameterSet = preset("CRC-16/T10-DIF", 16, 0x8BB7, 0, false, false, 0, 0xD0DB);
pub const CRC_16_TELEDISK: ParameterSet = preset("CRC-16/TELEDISK", 16, 0xA097, 0, false, false, 0, 0x0FB3);
pub const CRC_16_CDMA2000: ParameterSet = preset("CRC-16/CDMA2000", 16, 0xC867, !0, false, false, 0, 0x4C06);
pub const CRC_17_CAN_FD: ParameterSet = preset("CRC-17/CAN-FD", 17, 0x1_685B, 0, false, false, 0, 0x0_4F03);
pub const CRC_21_CAN_FD: ParameterSet = preset("CRC-21/CAN-FD", 21, 0x10_2899, 0, false, false, 0, 0x0E_D841);
pub const CRC_24_BLE: ParameterSet = preset("CRC-24/BLE", 24, 0x00_065B, 0x55_5555, true, true, 0, 0xC2_5A56);
pub const CRC_24_INTERLAKEN: ParameterSet = preset("CRC-24/INTERLAKEN", 24, 0x32_8B63, !0, false, false, !0, 0xB4_F3E6);
pub const CRC_24_FLEXRAY_A: ParameterSet =
  preset("CRC-24/FLEXRAY-A", 24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0, 0x79_79BD);
pub const CRC_24_FLEXRAY_B: ParameterSet =
  preset("CRC-24/FLEXRAY-B", 24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0, 0x1F_23B8);
pub const CRC_24_LTE_B: ParameterSet = preset("CRC-24/LTE-B", 24, 0x80_0063, 0, false, false, 0, 0x23_EF52);
pub const CRC_24_OS_9: ParameterSet = preset("CRC-24/OS-9", 24, 0x80_0063, !0, false, false, !0, 0x20_0FA5);
pub const CRC_24_LTE_A: ParameterSet = preset("CRC-24/LTE-A", 24, 0x86_4CFB, 0, false, false, 0, 0xCD_E703);
pub const CRC_24_OPENPGP: ParameterSet = preset("CRC-24/OPENPGP", 24, 0x86_4CFB, 0xB7_04CE, false, false, 0, 0x21_CF02);
pub const CRC_30_CDMA: ParameterSet =
  preset("CRC-30/CDMA", 30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF, 0x04C3_4ABF);
pub const CRC_31_PHILIPS: ParameterSet =
  preset("CRC-31/PHILIPS", 31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, 0x0CE9_E46C);
pub const CRC_32_XFER: ParameterSet = preset("CRC-32/XFER", 32, 0x0000_00AF, 0, false, false, 0, 0xBD0B_E338);
pub const CRC_32_CKSUM: ParameterSet = preset("CRC-32/CKSUM", 32, 0x04C1_1DB7, 0, false, false, !0, 0x765E_7680);
pub const CRC_32_MPEG_2: ParameterSet = preset("CRC-32/MPEG-2", 32, 0x04C1_1DB7, !0, false, false, 0, 0x0376_E6E7);
pub const CRC_32_BZIP2: ParameterSet = preset("CRC-32/BZIP2", 32, 0x04C1_1DB7, !0, false, false, !0, 0xFC89_1918);
pub const CRC_32_JAMCRC: ParameterSet = preset("CRC-32/JAMCRC", 32, 0x04C1_1DB7, !0, true, true, 0, 0x340B_C6D9);
pub const CRC_32_ISO_HDLC: ParameterSet = preset("CRC-32/ISO-HDLC", 32, 0x04C1_1DB7, !0, true, true, !0, 0xCBF4_3926);
pub const CRC_32_ISCSI: ParameterSet = preset("CRC-32/ISCSI", 32, 0x1EDC_6F41, !0, true, true, !0, 0xE306_9283);
pub const CRC_32_MEF: ParameterSet = preset("CRC-32/MEF", 32, 0x741B_8CD7, !0, true, true, 0, 0xD2C2_2F51);
pub const CRC_32_CD_ROM_EDC: ParameterSet = preset("CRC-32/CD-ROM-EDC", 32, 0x8001_801B, 0, true, true, 0, 0x6EC2_EDC4);
pub const CRC_32_AIXM: ParameterSet = preset("CRC-32/AIXM", 32, 0x8141_41AB, 0, false, false, 0, 0x3010_BF7F);
pub const CRC_32_BASE91_D: ParameterSet = preset("CRC-32/BASE91-D", 32, 0xA833_982B, !0, true, true, !0, 0x8731_5576);
pub const CRC_32_AUTOSAR: ParameterSet = preset("CRC-32/AUTOSAR", 32, 0xF4AC_FB13, !0, true, true, !0, 0x1697_D06A);
pub const CRC_40_GSM: ParameterSet = preset("CRC-40/GSM", 40, 0x00_0482_0009, 0, false, false, !0, 0xD4_164F_C646);
pub const CRC_64_GO_ISO: ParameterSet =
  preset("CRC-64/GO-ISO", 64, 0x0000_0000_0000_001B, !0, true, true, !0, 0xB909_56C7_75A4_1001);
pub const CRC_64_MS: ParameterSet =
  preset("CRC-64/MS", 64, 0x259C_84CB_A642_6349, !0, true, true, 0, 0x75D4_B74F_024E_CEEA);
pub const CRC_64_ECMA_182: ParameterSet =
  preset("CRC-64/ECMA-182", 64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0, 0x6C40_DF5F_0B49_7347);
pub const CRC_64_WE: ParameterSet =
  preset("CRC-64/WE", 64, 0x42F0_E1EB_A9EA_3693, !0, false, false, !0, 0x62EC_59E3_F1A4_F00A);
pub const CRC_64_XZ: ParameterSet =
  preset("CRC-64/XZ", 64, 0x42F0_E1EB_A9EA_3693, !0, true, true, !0, 0x995D_C9BB_DF19_39FA);
pub const CRC_64_REDIS: ParameterSet =
  preset("CRC-64/REDIS", 64, 0xAD93_D235_94C9_35A9, 0, true, true, 0, 0xE9C6_D914_C4B8_D9CA);

/// Every entry, in declaration order (by width, then polynomial).
pub const ALL: &[ParameterSet] = &[
  CRC_3_GSM,
  CRC_3_ROHC,
  CRC_4_G_704,
  CRC_4_INTERLAKEN,
  CRC_5_USB,
  CRC_5_EPC_C1G2,
  CRC_5_G_704,
  CRC_6_G_704,
  CRC_6_CDMA2000_A,
  CRC_6_CDMA2000_B,
  CRC_6_DARC,
  CRC_6_GSM,
  CRC_7_MMC,
  CRC_7_UMTS,
  CRC_7_ROHC,
  CRC_8_SMBUS,
  CRC_8_I_432_1,
  CRC_8_ROHC,
  CRC_8_GSM_A,
  CRC_8_MIFARE_MAD,
  CRC_8_I_CODE,
  CRC_8_HITAG,
  CRC_8_SAE_J1850,
  CRC_8_TECH_3250,
  CRC_8_OPENSAFETY,
  CRC_8_AUTOSAR,
  CRC_8_MAXIM_DOW,
  CRC_8_NRSC_5,
  CRC_8_DARC,
  CRC_8_GSM_B,
  CRC_8_LTE,
  CRC_8_WCDMA,
  CRC_8_CDMA2000,
  CRC_8_BLUETOOTH,
  CRC_8_DVB_S2,
  CRC_10_GSM,
  CRC_10_ATM,
  CRC_10_CDMA2000,
  CRC_11_UMTS,
  CRC_11_FLEXRAY,
  CRC_12_DECT,
  CRC_12_UMTS,
  CRC_12_GSM,
  CRC_12_CDMA2000,
  CRC_13_BBC,
  CRC_14_DARC,
  CRC_14_GSM,
  CRC_15_CAN,
  CRC_15_MPT1327,
  CRC_16_DECT_X,
  CRC_16_DECT_R,
  CRC_16_NRSC_5,
  CRC_16_XMODEM,
  CRC_16_GSM,
  CRC_16_KERMIT,
  CRC_16_SPI_FUJITSU,
  CRC_16_TMS37157,
  CRC_16_RIELLO,
  CRC_16_ISO_IEC_14443_3_A,
  CRC_16_IBM_3740,
  CRC_16_GENIBUS,
  CRC_16_MCRF4XX,
  CRC_16_IBM_SDLC,
  CRC_16_PROFIBUS,
  CRC_16_EN_13757,
  CRC_16_DNP,
  CRC_16_OPENSAFETY_A,
  CRC_16_OPENSAFETY_B,
  CRC_16_M17,
  CRC_16_LJ1200,
  CRC_16_UMTS,
  CRC_16_ARC,
  CRC_16_MAXIM_DOW,
  CRC_16_DDS_110,
  CRC_16_CMS,
  CRC_16_MODBUS,
  CRC_16_USB,
  CRC_16_T10_DIF,
  CRC_16_TELEDISK,
  CRC_16_CDMA2000,
  CRC_17_CAN_FD,
  CRC_21_CAN_FD,
  CRC_24_BLE,
  CRC_24_INTERLAKEN,
  CRC_24_FLEXRAY_A,
  CRC_24_FLEXRAY_B,
  CRC_24_LTE_B,
  CRC_24_OS_9,
  CRC_24_LTE_A,
  CRC_24_OPENPGP,
  CRC_30_CDMA,
  CRC_31_PHILIPS,
  CRC_32_XFER,
  CRC_32_CKSUM,
  CRC_32_MPEG_2,
  CRC_32_BZIP2,
  CRC_32_JAMCRC,
  CRC_32_ISO_HDLC,
  CRC_32_ISCSI,
  CRC_32_MEF,
  CRC_32_CD_ROM_EDC,
  CRC_32_AIXM,
  CRC_32_BASE91_D,
  CRC_32_AUTOSAR,
  CRC_40_GSM,
  CRC_64_GO_ISO,
  CRC_64_MS,
  CRC_64_ECMA_182,
  CRC_64_WE,
  CRC_64_XZ,
  CRC_64_REDIS,
];

const _: () = {
  let mut i = 0;
  while i < ALL.len() {
    assert!(ALL[i].computed_check() == ALL[i].check(), "catalog check value mismatch");
    i += 1;
  }
};

/// First entry whose `width`, `poly` and `check` all match.
///
/// Useful for naming an algorithm observed in the wild: the polynomial and the
/// CRC of `"123456789"` together almost always pin it down.
#[must_use]
pub fn find_by(width: u8, poly: u64, check: u64) -> Option<ParameterSet> {
  ALL
    .iter()
    .find(|p| p.width() == width && p.poly() == poly && p.check() == check)
    .copied()
}

/// Look an entry up by name.
///
/// Matching ignores ASCII case and treats every non-alphanumeric character as
/// `_`, so `"crc-16/xmodem"`, `"CRC_16_XMODEM"` and `"CRC-16/XMODEM"` are the
/// same name.
#[must_use]
pub fn by_name(name: &str) -> Option<ParameterSet> {
  let name = name.as_bytes();
  ALL.iter().find(|p| normalized_eq(p.name().as_bytes(), name)).copied()
}

/// Entries whose normalized name contains the normalized `fragment`.
pub fn search(fragment: &str) -> impl Iterator<Item = ParameterSet> + '_ {
  ALL
    .iter()
    .filter(move |p| normalized_contains(p.name().as_bytes(), fragment.as_bytes()))
    .copied()
}

/// Run [`ParameterSet::self_test`] on every entry.
///
/// # Errors
///
/// The first [`CrcError::ChecksumMismatch`] encountered.
pub fn verify_all() -> Result<(), CrcError> {
  ALL.iter().try_for_each(ParameterSet::self_test)
}

#[inline]
const fn normalize(b: u8) -> u8 {
  if b.is_ascii_alphanumeric() { b.to_ascii_uppercase() } else { b'_' }
}

fn normalized_eq(a: &[u8], b: &[u8]) -> bool {
  a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| normalize(x) == normalize(y))
}

fn normalized_contains(haystack: &[u8], needle: &[u8]) -> bool {
  needle.is_empty() || haystack.windows(needle.len()).any(|w| normalized_eq(w, needle))
}
