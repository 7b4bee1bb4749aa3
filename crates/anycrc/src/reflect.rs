//! Bit reflection.
//!
//! "Reflected" means bit-reversed over a given width. Reflection is used to
//! flip input bytes (`width = 8`), to flip the final register (`width` of the
//! CRC), and to pre-reflect the initial register of a reflected table engine.
//!
//! ```text
//!  CRC-32 generator 0x04C11DB7:
//!      0000 0100 1100 0001 0001 1101 1011 0111
//!  reversed over 32 bits -> 0xEDB88320:
//!      1110 1101 1011 1000 1000 0011 0010 0000
//! ```
//!
//! Bits at or above `width` are ignored; the result never has them set.

/// Reverse the low `width` bits of `value`.
///
/// `width` is expected in `1..=64`. A `width` of zero yields zero and larger
/// widths are clamped to 64.
#[inline]
#[must_use]
pub const fn reverse(value: u64, width: u8) -> u64 {
  if width == 0 {
    return 0;
  }
  let width = if width > 64 { 64 } else { width };
  value.reverse_bits() >> (64 - width as u32)
}

/// Reverse the low `width` bits of a 32-bit `value`.
///
/// `width` is expected in `1..=32`; out-of-range widths behave as in [`reverse`]
/// with a 32-bit ceiling.
#[inline]
#[must_use]
pub const fn reverse32(value: u32, width: u8) -> u32 {
  if width == 0 {
    return 0;
  }
  let width = if width > 32 { 32 } else { width };
  value.reverse_bits() >> (32 - width as u32)
}

/// Reverse all eight bits of `byte`.
#[inline]
#[must_use]
pub const fn reverse8(byte: u8) -> u8 {
  byte.reverse_bits()
}
