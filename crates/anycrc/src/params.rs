//! CRC algorithm parameters.
//!
//! This module defines the validated description of one CRC algorithm,
//! following the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crate::{CrcError, bitwise};

/// Reference input whose CRC is the `check` value of every parameter set.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// This struct captures everything needed to define a CRC algorithm of width
/// 1 to 64 bits. It is immutable once built: every numeric field is masked to
/// `width` bits at construction and the derived `mask`/`msb` never change.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (1..=64)
/// - `poly`: The generator polynomial in normal form (without the implicit top bit)
/// - `init`: Initial value for the CRC register
/// - `refin`: If true, reflect each input byte before processing
/// - `refout`: If true, reflect the final register before the XOR
/// - `xorout`: Value to XOR with the final register
/// - `check`: The CRC of [`CHECK_INPUT`]
///
/// # Ordering
///
/// Equality, ordering and hashing compare `width, poly, init, xorout, check,
/// refin, refout, name` in that priority. Two sets with identical numbers but
/// different names are therefore distinct values, even though they compute
/// the same CRC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterSet {
  // Field order drives the derived ordering.
  width: u8,
  poly: u64,
  init: u64,
  xorout: u64,
  check: u64,
  refin: bool,
  refout: bool,
  name: &'static str,
  mask: u64,
  msb: u64,
}

impl ParameterSet {
  /// Build a validated parameter set.
  ///
  /// All numeric fields are masked to `width` bits.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidParameter`] when `width` is outside `1..=64`.
  ///
  /// # Examples
  ///
  /// ```
  /// use anycrc::ParameterSet;
  ///
  /// let sata = ParameterSet::new("CRC-32/SATA", 32, 0x04C1_1DB7, 0x5232_5032, false, false, 0, 0xCF72_AFE8)?;
  /// assert_eq!(sata.mask(), 0xFFFF_FFFF);
  /// sata.self_test()?;
  /// # Ok::<(), anycrc::CrcError>(())
  /// ```
  #[allow(clippy::too_many_arguments)]
  pub const fn new(
    name: &'static str,
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
  ) -> Result<Self, CrcError> {
    if width == 0 || width > 64 {
      return Err(CrcError::InvalidParameter {
        name,
        field: "width",
        value: width as u64,
      });
    }
    let mask = u64::MAX >> (64 - width as u32);
    Ok(Self {
      width,
      poly: poly & mask,
      init: init & mask,
      xorout: xorout & mask,
      check: check & mask,
      refin,
      refout,
      name,
      mask,
      msb: 1 << (width - 1),
    })
  }

  /// Label used for diagnostics.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Register width in bits (1..=64).
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, normal form, without the implicit top bit.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.xorout
  }

  /// Expected CRC of [`CHECK_INPUT`].
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }

  /// `width` low bits set (all ones for width 64).
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// The top bit of the register.
  #[inline]
  #[must_use]
  pub const fn msb(&self) -> u64 {
    self.msb
  }

  /// The polynomial reversed over `width` bits, as used by LSB-first hardware.
  #[inline]
  #[must_use]
  pub const fn poly_reflected(&self) -> u64 {
    crate::reflect::reverse(self.poly, self.width)
  }

  /// The same algorithm under a different label.
  #[inline]
  #[must_use]
  pub const fn renamed(self, name: &'static str) -> Self {
    Self { name, ..self }
  }

  /// Parameters of the single-byte helper a lookup table is derived from.
  ///
  /// Identical to `self` except `init = 0`, `xorout = 0` and `refout = refin`, so
  /// each entry is the contribution of one byte alone, already in the bit
  /// orientation the table engine keeps its register in.
  #[inline]
  #[must_use]
  pub(crate) const fn table_helper(&self) -> Self {
    Self {
      init: 0,
      xorout: 0,
      refout: self.refin,
      ..*self
    }
  }

  /// CRC of [`CHECK_INPUT`] as computed by the bitwise engine.
  #[inline]
  #[must_use]
  pub const fn computed_check(&self) -> u64 {
    let register = bitwise::update_register(self, self.init, CHECK_INPUT);
    bitwise::finish(self, register)
  }

  /// Verify the declared `check` against the bitwise engine.
  ///
  /// Meant to run once at startup or in tests, not on every construction.
  ///
  /// # Errors
  ///
  /// [`CrcError::ChecksumMismatch`] carrying the expected and computed values.
  pub fn self_test(&self) -> Result<(), CrcError> {
    let computed = self.computed_check();
    if computed == self.check {
      return Ok(());
    }
    tracing::debug!(
      name = self.name,
      expected = self.check,
      computed,
      "CRC parameter self-test failed"
    );
    Err(CrcError::ChecksumMismatch {
      name: self.name,
      expected: self.check,
      computed,
    })
  }
}

impl fmt::Display for ParameterSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} width={} poly={:#x} init={:#x} refin={} refout={} xorout={:#x} check={:#x}",
      self.name, self.width, self.poly, self.init, self.refin, self.refout, self.xorout, self.check
    )
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  const ISO_HDLC: ParameterSet =
    match ParameterSet::new("CRC-32/ISO-HDLC", 32, 0x04C1_1DB7, !0, true, true, !0, 0xCBF4_3926) {
      Ok(p) => p,
      Err(_) => panic!("bad test parameters"),
    };

  #[test]
  fn masks_every_field() {
    let p = ParameterSet::new("narrow", 5, 0xFF05, 0xFFFF, true, true, 0x1234_5678, 0xABCD).unwrap();
    assert_eq!(p.poly(), 0x05);
    assert_eq!(p.init(), 0x1F);
    assert_eq!(p.xorout(), 0x18);
    assert_eq!(p.check(), 0x0D);
    assert_eq!(p.mask(), 0x1F);
    assert_eq!(p.msb(), 0x10);
  }

  #[test]
  fn width_64_mask_is_all_ones() {
    let p = ParameterSet::new("wide", 64, 0x1B, !0, true, true, !0, 0).unwrap();
    assert_eq!(p.mask(), u64::MAX);
    assert_eq!(p.msb(), 1 << 63);
  }

  #[test]
  fn width_1_is_valid() {
    let p = ParameterSet::new("parity", 1, 1, 0, false, false, 0, 1).unwrap();
    assert_eq!(p.mask(), 1);
    assert_eq!(p.msb(), 1);
    // Width-1 CRC with poly 1 is the parity of the input bits.
    assert_eq!(p.computed_check(), u64::from(CHECK_INPUT.iter().map(|b| b.count_ones()).sum::<u32>() & 1));
  }

  #[test]
  fn rejects_bad_width() {
    for width in [0u8, 65, 255] {
      let err = ParameterSet::new("bad", width, 1, 0, false, false, 0, 0).unwrap_err();
      assert_eq!(
        err,
        CrcError::InvalidParameter {
          name: "bad",
          field: "width",
          value: u64::from(width),
        }
      );
    }
  }

  #[test]
  fn accepts_zero_poly_after_masking() {
    // x^8 divides M(x) * x^8, so once `init` is shifted out only `xorout` remains.
    let p = ParameterSet::new("zero-poly", 8, 0x100, 0xA5, false, false, 0x3C, 0x3C).unwrap();
    assert_eq!(p.poly(), 0);
    assert_eq!(p.computed_check(), 0x3C);
    assert_eq!(p.self_test(), Ok(()));
  }

  #[cfg(feature = "std")]
  #[test]
  fn zero_poly_engines_agree() {
    use crate::{BitwiseCrc, TableCrc};

    for width in [3, 8, 13, 64] {
      for refin in [false, true] {
        for refout in [false, true] {
          let p = ParameterSet::new("zero-poly", width, 0, 0x1ABC, refin, refout, 0x0F0F, 0).unwrap();
          assert_eq!(
            TableCrc::checksum(p, CHECK_INPUT),
            BitwiseCrc::checksum(&p, CHECK_INPUT),
            "width={width} refin={refin} refout={refout}"
          );
        }
      }
    }
  }

  #[test]
  fn self_test_passes_for_iso_hdlc() {
    assert_eq!(ISO_HDLC.self_test(), Ok(()));
  }

  #[test]
  fn self_test_reports_both_values() {
    let wrong = ParameterSet::new("wrong", 16, 0x1021, 0, false, false, 0, 0x1234).unwrap();
    assert_eq!(
      wrong.self_test(),
      Err(CrcError::ChecksumMismatch {
        name: "wrong",
        expected: 0x1234,
        computed: 0x31C3,
      })
    );
  }

  #[test]
  fn ordering_compares_numbers_before_name() {
    let a = ISO_HDLC;
    let b = ISO_HDLC.renamed("AAA");
    assert_ne!(a, b);
    // Same numbers, so the name decides.
    assert!(b < a);

    let narrower = ParameterSet::new("ZZZ", 16, 0x1021, 0, false, false, 0, 0x31C3).unwrap();
    assert!(narrower < b, "width has priority over name");
  }

  #[test]
  fn table_helper_strips_init_and_xorout() {
    let h = ISO_HDLC.table_helper();
    assert_eq!(h.init(), 0);
    assert_eq!(h.xorout(), 0);
    assert_eq!(h.refout(), ISO_HDLC.refin());
    assert_eq!(h.refin(), ISO_HDLC.refin());
    assert_eq!(h.poly(), ISO_HDLC.poly());
  }

  #[test]
  fn poly_reflected_matches_lsb_first_constant() {
    assert_eq!(ISO_HDLC.poly_reflected(), 0xEDB8_8320);
  }

  #[test]
  fn display_catalogue_line() {
    let line = ParameterSet::new("CRC-8/SMBUS", 8, 0x07, 0, false, false, 0, 0xF4)
      .unwrap()
      .to_string();
    assert_eq!(
      line,
      "CRC-8/SMBUS width=8 poly=0x7 init=0x0 refin=false refout=false xorout=0x0 check=0xf4"
    );
  }
}
