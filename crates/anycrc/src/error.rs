//! Error type for parameter validation and self-tests.
//!
//! Engines never fail once constructed; the only failures are a structurally
//! invalid parameter set (rejected at construction) and a self-test whose
//! computed check value disagrees with the declared one.

use core::fmt;

/// Errors raised while building or validating a [`ParameterSet`](crate::ParameterSet).
///
/// # Examples
///
/// ```
/// use anycrc::{CrcError, ParameterSet};
///
/// let err = ParameterSet::new("too-wide", 65, 0x1, 0, false, false, 0, 0).unwrap_err();
/// assert!(matches!(err, CrcError::InvalidParameter { field: "width", .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// A field of the parameter set is outside its valid range.
  InvalidParameter {
    /// Label of the offending parameter set.
    name: &'static str,
    /// Which field was rejected.
    field: &'static str,
    /// The rejected value.
    value: u64,
  },
  /// Computing the CRC of `"123456789"` did not reproduce the declared check value.
  ChecksumMismatch {
    /// Label of the offending parameter set.
    name: &'static str,
    /// The declared check value.
    expected: u64,
    /// What the bitwise engine actually produced.
    computed: u64,
  },
}

impl CrcError {
  /// Label of the parameter set the error refers to.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::InvalidParameter { name, .. } | Self::ChecksumMismatch { name, .. } => name,
    }
  }
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidParameter { name, field, value } => {
        write!(f, "invalid {field} ({value:#x}) for {name}")
      }
      Self::ChecksumMismatch {
        name,
        expected,
        computed,
      } => write!(f, "invalid check ({name}) expected: {expected:x} calculated: {computed:x}"),
    }
  }
}

impl core::error::Error for CrcError {}
