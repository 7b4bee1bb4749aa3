//! Bit-at-a-time reference engine.
//!
//! This engine evaluates the CRC definition directly from a [`ParameterSet`],
//! one input bit at a time. It is:
//!
//! - **Obviously correct**: each step is one step of polynomial long division
//! - **Table-free**: no precomputation, no shared state
//! - **Const-evaluable**: check values can be verified at compile time
//!
//! Every other engine in this crate must produce identical results.
//!
//! # Algorithm
//!
//! ```text
//! if refin: byte = reverse(byte, 8)
//! for each bit of byte, MSB first:
//!   top = register & msb
//!   register <<= 1
//!   if bit: top = !top
//!   if top: register ^= poly
//! value = ((refout ? reverse(register, width) : register) ^ xorout) & mask
//! ```
//!
//! This is intentionally slow (several operations per bit). Use
//! [`TableCrc`](crate::TableCrc) for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use traits::Checksum;

use crate::{ParameterSet, reflect};

/// Advance `register` by one input byte.
#[inline]
#[must_use]
pub(crate) const fn update_byte_register(params: &ParameterSet, mut register: u64, byte: u8) -> u64 {
  let byte = if params.refin() { reflect::reverse8(byte) } else { byte };
  let msb = params.msb();
  let mut bit = 0x80u8;
  while bit != 0 {
    let mut top = register & msb != 0;
    register = (register << 1) & params.mask();
    if byte & bit != 0 {
      top = !top;
    }
    if top {
      register ^= params.poly();
    }
    bit >>= 1;
  }
  register
}

/// Advance `register` over `data`, in order.
#[must_use]
pub(crate) const fn update_register(params: &ParameterSet, mut register: u64, data: &[u8]) -> u64 {
  let mut i = 0usize;
  while i < data.len() {
    register = update_byte_register(params, register, data[i]);
    i += 1;
  }
  register
}

/// Apply output reflection and the final XOR.
#[inline]
#[must_use]
pub(crate) const fn finish(params: &ParameterSet, register: u64) -> u64 {
  let out = if params.refout() {
    reflect::reverse(register, params.width())
  } else {
    register
  };
  (out ^ params.xorout()) & params.mask()
}

/// Bitwise CRC engine.
///
/// # Example
///
/// ```
/// use anycrc::{BitwiseCrc, Checksum, catalog};
///
/// let mut crc = BitwiseCrc::new(catalog::CRC_16_XMODEM);
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0x31C3);
/// ```
#[derive(Clone, Debug)]
pub struct BitwiseCrc {
  params: ParameterSet,
  register: u64,
}

impl BitwiseCrc {
  /// Create an engine bound to `params`, already reset.
  #[inline]
  #[must_use]
  pub const fn new(params: ParameterSet) -> Self {
    Self {
      register: params.init(),
      params,
    }
  }

  /// Compute the CRC of `data` in one shot.
  #[inline]
  #[must_use]
  pub const fn checksum(params: &ParameterSet, data: &[u8]) -> u64 {
    finish(params, update_register(params, params.init(), data))
  }

  #[inline]
  #[must_use]
  pub const fn parameters(&self) -> &ParameterSet {
    &self.params
  }

  #[inline]
  pub const fn reset(&mut self) {
    self.register = self.params.init();
  }

  #[inline]
  pub const fn update_byte(&mut self, byte: u8) {
    self.register = update_byte_register(&self.params, self.register, byte);
  }

  #[inline]
  pub const fn update(&mut self, data: &[u8]) {
    self.register = update_register(&self.params, self.register, data);
  }

  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    finish(&self.params, self.register)
  }
}

impl Checksum for BitwiseCrc {
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

#[cfg(feature = "std")]
impl std::io::Write for BitwiseCrc {
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
