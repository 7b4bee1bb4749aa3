//! Fixed-parameter engines.
//!
//! These hard-code one algorithm each and need no [`ParameterSet`] at
//! runtime. They satisfy the same [`Checksum`] contract as the generic engines
//! and report the matching catalog entry from `parameters()`.

// Table indexing is by `u8`, always < 256.
#![allow(clippy::indexing_slicing)]

use traits::Checksum;

use crate::{ParameterSet, catalog};

const XMODEM_POLY: u16 = 0x1021;
const DVB_S2_POLY: u8 = 0xD5;

/// MSB-first CRC-16 table for polynomial 0x1021.
const XMODEM_TABLE: [u16; 256] = {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = (i as u16) << 8;
    let mut j = 0;
    while j < 8 {
      crc = if crc & 0x8000 != 0 { (crc << 1) ^ XMODEM_POLY } else { crc << 1 };
      j += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
};

/// CRC-16/XMODEM, table driven.
///
/// ```
/// use anycrc::{Checksum, fixed::Crc16Xmodem};
///
/// assert_eq!(Crc16Xmodem::new().digest(b"123456789"), 0x31C3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc16Xmodem {
  crc: u16,
}

impl Crc16Xmodem {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { crc: 0 }
  }

  /// One-shot CRC-16/XMODEM.
  #[inline]
  #[must_use]
  pub const fn checksum(data: &[u8]) -> u16 {
    let mut crc = Self::new();
    crc.update(data);
    crc.crc
  }

  #[inline]
  pub const fn update(&mut self, data: &[u8]) {
    let mut crc = self.crc;
    let mut i = 0;
    while i < data.len() {
      crc = (crc << 8) ^ XMODEM_TABLE[((crc >> 8) as u8 ^ data[i]) as usize];
      i += 1;
    }
    self.crc = crc;
  }

  #[inline]
  #[must_use]
  pub const fn value(&self) -> u16 {
    self.crc
  }
}

impl Checksum for Crc16Xmodem {
  type Params = ParameterSet;

  #[inline]
  fn parameters(&self) -> &ParameterSet {
    &catalog::CRC_16_XMODEM
  }

  #[inline]
  fn reset(&mut self) {
    self.crc = 0;
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Self::update(self, &[byte]);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn value(&self) -> u64 {
    u64::from(self.crc)
  }
}

/// Advance a CRC-8/DVB-S2 register by one byte, branchless.
#[inline]
const fn dvb_s2_byte(mut crc: u8, byte: u8) -> u8 {
  crc ^= byte;

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  crc = (crc << 1) ^ (DVB_S2_POLY & mask);

  let mask = 0u8.wrapping_sub(crc >> 7);
  (crc << 1) ^ (DVB_S2_POLY & mask)
}

/// CRC-8/DVB-S2, table-free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc8DvbS2 {
  crc: u8,
}

impl Crc8DvbS2 {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { crc: 0 }
  }

  /// One-shot CRC-8/DVB-S2.
  #[inline]
  #[must_use]
  pub const fn checksum(data: &[u8]) -> u8 {
    let mut crc = Self::new();
    crc.update(data);
    crc.crc
  }

  #[inline]
  pub const fn update(&mut self, data: &[u8]) {
    let mut i = 0;
    while i < data.len() {
      self.crc = dvb_s2_byte(self.crc, data[i]);
      i += 1;
    }
  }

  #[inline]
  #[must_use]
  pub const fn value(&self) -> u8 {
    self.crc
  }
}

impl Checksum for Crc8DvbS2 {
  type Params = ParameterSet;

  #[inline]
  fn parameters(&self) -> &ParameterSet {
    &catalog::CRC_8_DVB_S2
  }

  #[inline]
  fn reset(&mut self) {
    self.crc = 0;
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    self.crc = dvb_s2_byte(self.crc, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn value(&self) -> u64 {
    u64::from(self.crc)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc16Xmodem {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc8DvbS2 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
