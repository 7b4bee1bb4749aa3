//! The CRC engine contract.
//!
//! - **Streaming**: bytes may arrive in any number of `update` calls
//! - **Non-destructive reads**: `value()` can be called mid-stream
//! - **Static dispatch**: callers pick a concrete engine at construction time

/// A CRC engine bound to one parameter set.
///
/// Every engine owns a read-only parameter set and a mutable register. The
/// register is reinitialised by [`reset`](Self::reset), advanced by the
/// `update*` family and observed through [`value`](Self::value).
///
/// # Usage
///
/// ```rust,ignore
/// use anycrc::{catalog, Checksum, TableCrc};
///
/// let mut crc = TableCrc::new(catalog::CRC_32_ISO_HDLC);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - A freshly constructed engine is in the same state as one that was just `reset()`
/// - `value()` must be pure: calling it repeatedly returns the same result
/// - Splitting input across `update` calls must not change the final value
pub trait Checksum {
  /// Description of the algorithm the engine computes.
  type Params;

  /// The parameter set this engine was built for.
  fn parameters(&self) -> &Self::Params;

  /// Reinitialise the register so the engine behaves as if newly constructed.
  fn reset(&mut self);

  /// Feed a single byte.
  fn update_byte(&mut self, byte: u8);

  /// Feed a contiguous run of bytes, in order.
  #[inline]
  fn update(&mut self, data: &[u8]) {
    for &byte in data {
      self.update_byte(byte);
    }
  }

  /// Feed `len` bytes of `data` starting at `offset`.
  ///
  /// Equivalent to `self.update(&data[offset..offset + len])`.
  ///
  /// # Panics
  ///
  /// Panics if `offset + len` overflows or exceeds `data.len()`, exactly as
  /// the equivalent slice expression would.
  #[inline]
  #[allow(clippy::indexing_slicing)]
  fn update_range(&mut self, data: &[u8], offset: usize, len: usize) {
    self.update(&data[offset..offset + len]);
  }

  /// Feed several non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Current CRC value after output reflection and the final XOR.
  ///
  /// Does not disturb the register; further updates continue from where the
  /// engine left off.
  #[must_use]
  fn value(&self) -> u64;

  /// Reset, feed `data`, and return the resulting value.
  #[inline]
  #[must_use]
  fn digest(&mut self, data: &[u8]) -> u64 {
    self.reset();
    self.update(data);
    self.value()
  }

  /// Wrap a reader so every byte read through it also feeds this engine.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use anycrc::{catalog, Checksum, TableCrc};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = TableCrc::new(catalog::CRC_32_ISCSI).reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(self, inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, self)
  }

  /// Wrap a writer so every byte accepted by it also feeds this engine.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, self)
  }
}
