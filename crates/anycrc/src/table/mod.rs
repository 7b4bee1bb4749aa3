//! Byte-at-a-time lookup-table engine.
//!
//! Each [`TableCrc`] consumes one input byte per step using a 256-entry table
//! derived from its [`ParameterSet`]. Tables are built once per distinct
//! algorithm and shared through a [`TableCache`].
//!
//! # Table Derivation
//!
//! Entry `i` is the bitwise CRC of the single byte `i` under a helper
//! parameter set equal to the engine's own except `init = 0`, `xorout = 0` and
//! `refout = refin`. The entry is thus the contribution of one byte acting
//! alone, already in the orientation the register is kept in:
//!
//! | `refin` | Register orientation | Update |
//! |---------|----------------------|--------|
//! | true | reflected (LSB-first) | `(r >> 8) ^ T[(b ^ r) & 0xFF]` |
//! | false, width < 8 | normal | `T[(b ^ (r << (8 - width))) & 0xFF]` |
//! | false, width >= 8 | normal | `T[(b ^ (r >> (width - 8))) & 0xFF] ^ (r << 8)` |
//!
//! Because a reflected register is already bit-reversed, the output stage only
//! reflects when `refout != refin`, and the initial register is pre-reflected
//! when `refin` is set.

mod cache;

use alloc::sync::Arc;
use core::fmt;

pub use cache::{CacheStats, TableCache};
use traits::Checksum;

use crate::{ParameterSet, bitwise, reflect};

/// A 256-entry transition table for one CRC algorithm.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable([u64; 256]);

impl CrcTable {
  /// Derive the table for `params`.
  ///
  /// Runs the bitwise engine once per byte value against the single-byte
  /// helper parameters. This is a `const fn`, so tables for parameter sets
  /// known at compile time can be embedded in the binary.
  #[must_use]
  pub const fn build(params: &ParameterSet) -> Self {
    let helper = params.table_helper();
    let mut entries = [0u64; 256];
    let mut i = 0usize;
    while i < 256 {
      let register = bitwise::update_byte_register(&helper, helper.init(), i as u8);
      entries[i] = bitwise::finish(&helper, register);
      i += 1;
    }
    Self(entries)
  }

  /// Entry for `index`.
  #[inline]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // a u8 index is always < 256
  pub const fn get(&self, index: u8) -> u64 {
    self.0[index as usize]
  }

  /// All 256 entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u64; 256] {
    &self.0
  }
}

impl fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("t[1]", &format_args!("{:#x}", self.get(1)))
      .field("t[128]", &format_args!("{:#x}", self.get(128)))
      .finish_non_exhaustive()
  }
}

/// Lookup-table CRC engine.
///
/// Construction fetches (or builds, once) the table from the process-wide
/// [`TableCache::global`]. Clones share the same table.
///
/// # Example
///
/// ```
/// use anycrc::{Checksum, TableCrc, catalog};
///
/// let mut crc = TableCrc::new(catalog::CRC_32_ISO_HDLC);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub struct TableCrc {
  params: ParameterSet,
  table: Arc<CrcTable>,
  /// Register value after `reset`, pre-reflected when `refin` is set.
  init: u64,
  register: u64,
}

impl TableCrc {
  /// Create an engine bound to `params`, using the process-wide table cache.
  #[inline]
  #[must_use]
  pub fn new(params: ParameterSet) -> Self {
    Self::with_cache(params, TableCache::global())
  }

  /// Create an engine bound to `params`, taking its table from `cache`.
  #[must_use]
  pub fn with_cache(params: ParameterSet, cache: &TableCache) -> Self {
    let init = if params.refin() {
      reflect::reverse(params.init(), params.width())
    } else {
      params.init()
    };
    Self {
      table: cache.get_or_build(&params),
      params,
      init,
      register: init,
    }
  }

  /// Compute the CRC of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(params: ParameterSet, data: &[u8]) -> u64 {
    let mut crc = Self::new(params);
    crc.update(data);
    crc.value()
  }

  #[inline]
  #[must_use]
  pub fn parameters(&self) -> &ParameterSet {
    &self.params
  }

  /// The shared transition table.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Arc<CrcTable> {
    &self.table
  }

  #[inline]
  pub fn reset(&mut self) {
    self.register = self.init;
  }

  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    let width = self.params.width();
    let r = self.register;
    self.register = if self.params.refin() {
      (r >> 8) ^ self.table.get(byte ^ r as u8)
    } else if width < 8 {
      self.table.get(byte ^ (r << (8 - width)) as u8)
    } else {
      (self.table.get(byte ^ (r >> (width - 8)) as u8) ^ (r << 8)) & self.params.mask()
    };
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    for &byte in data {
      self.update_byte(byte);
    }
  }

  #[inline]
  #[must_use]
  pub fn value(&self) -> u64 {
    let p = &self.params;
    let out = if p.refout() != p.refin() {
      reflect::reverse(self.register, p.width())
    } else {
      self.register
    };
    (out ^ p.xorout()) & p.mask()
  }
}

impl Checksum for TableCrc {
  type Params = ParameterSet;

  #[inline]
  fn parameters(&self) -> &ParameterSet {
    Self::parameters(self)
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Self::update_byte(self, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn value(&self) -> u64 {
    Self::value(self)
  }
}

impl std::io::Write for TableCrc {
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{BitwiseCrc, catalog, params::CHECK_INPUT};

  #[test]
  fn crc32_table_matches_published_constants() {
    let table = CrcTable::build(&catalog::CRC_32_ISO_HDLC);
    assert_eq!(table.get(0), 0);
    assert_eq!(table.get(1), 0x7707_3096);
    assert_eq!(table.get(128), 0xEDB8_8320);
    assert_eq!(table.get(255), 0x2D02_EF8D);
  }

  #[test]
  fn xmodem_table_matches_published_constants() {
    let table = CrcTable::build(&catalog::CRC_16_XMODEM);
    assert_eq!(table.get(1), 0x1021);
    assert_eq!(table.get(2), 0x2042);
    assert_eq!(table.get(255), 0x1EF0);
  }

  #[test]
  fn const_table() {
    const TABLE: CrcTable = CrcTable::build(&catalog::CRC_8_SMBUS);
    assert_eq!(TABLE.get(1), 0x07);
    assert_eq!(TABLE.entries().len(), 256);
  }

  #[test]
  fn scenario_iso_hdlc() {
    assert_eq!(TableCrc::checksum(catalog::CRC_32_ISO_HDLC, CHECK_INPUT), 0xCBF4_3926);
  }

  #[test]
  fn scenario_xmodem() {
    assert_eq!(TableCrc::checksum(catalog::CRC_16_XMODEM, CHECK_INPUT), 0x31C3);
  }

  #[test]
  fn sub_byte_widths_both_orientations() {
    for params in [catalog::CRC_3_GSM, catalog::CRC_3_ROHC, catalog::CRC_5_USB, catalog::CRC_7_MMC] {
      assert_eq!(TableCrc::checksum(params, CHECK_INPUT), params.check(), "{}", params.name());
    }
  }

  #[test]
  fn mixed_reflection() {
    // refin=false, refout=true
    let umts = catalog::CRC_12_UMTS;
    assert_eq!(TableCrc::checksum(umts, CHECK_INPUT), 0xDAF);

    // refin=true, refout=false: no catalog entry, so compare against the reference.
    let odd = ParameterSet::new("odd", 16, 0x8005, 0x1234, true, false, 0x00FF, 0).unwrap();
    assert_eq!(
      TableCrc::checksum(odd, CHECK_INPUT),
      BitwiseCrc::checksum(&odd, CHECK_INPUT)
    );
  }

  #[test]
  fn reset_restores_pre_reflected_init() {
    let mut crc = TableCrc::new(catalog::CRC_16_RIELLO);
    let fresh = crc.value();
    crc.update(b"noise");
    crc.reset();
    assert_eq!(crc.value(), fresh);
    assert_eq!(fresh, BitwiseCrc::new(catalog::CRC_16_RIELLO).value());
  }

  #[test]
  fn value_mid_stream_does_not_disturb() {
    let mut crc = TableCrc::new(catalog::CRC_64_XZ);
    crc.update(b"1234");
    let _ = crc.value();
    crc.update(b"56789");
    assert_eq!(crc.value(), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn clones_share_table() {
    let a = TableCrc::new(catalog::CRC_32_MPEG_2);
    let b = a.clone();
    assert!(Arc::ptr_eq(a.table(), b.table()));
  }

  #[test]
  fn debug_is_compact() {
    let table = CrcTable::build(&catalog::CRC_8_SMBUS);
    let dbg = alloc::format!("{table:?}");
    assert!(dbg.starts_with("CrcTable"));
    assert!(dbg.len() < 80);
  }
}
