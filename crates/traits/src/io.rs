//! I/O adapters for CRC engines.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] sit between a caller and an
//! underlying `Read`/`Write`, feeding exactly the bytes that actually moved
//! (short reads and short writes included) into a [`Checksum`](crate::Checksum)
//! engine.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # struct Sum(u64);
//! # impl Checksum for Sum {
//! #   type Params = ();
//! #   fn parameters(&self) -> &() { &() }
//! #   fn reset(&mut self) { self.0 = 0; }
//! #   fn update_byte(&mut self, b: u8) { self.0 += u64::from(b); }
//! #   fn value(&self) -> u64 { self.0 }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum(0).reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.crc(), u64::from(b'a') + u64::from(b'b') + u64::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Feed the first `n` bytes spread across `bufs` to `on_data`.
#[cfg(feature = "std")]
#[inline]
fn feed_prefix<'a>(bufs: impl Iterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    let take = remaining.min(buf.len());
    if take == 0 {
      break;
    }
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

#[cfg(feature = "std")]
#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  feed_prefix(bufs.iter().map(|b| &**b), n, on_data);
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write_vectored(bufs)?;
  feed_prefix(bufs.iter().map(|b| &**b), n, on_data);
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and feeds every byte read into a CRC engine.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `C`: The engine type (e.g. `TableCrc`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: crate::Checksum> {
  inner: R,
  engine: C,
}

#[cfg(feature = "std")]
impl<R, C: crate::Checksum> ChecksumReader<R, C> {
  /// Wrap `inner`, feeding `engine` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: R, engine: C) -> Self {
    Self { inner, engine }
  }

  /// Current CRC value of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.engine.value()
  }

  /// The wrapped engine.
  #[inline]
  pub fn engine(&self) -> &C {
    &self.engine
  }

  #[inline]
  pub fn engine_mut(&mut self) -> &mut C {
    &mut self.engine
  }

  /// Unwrap into the inner reader and the engine.
  #[inline]
  pub fn into_parts(self) -> (R, C) {
    (self.inner, self.engine)
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, C: crate::Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.engine.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.engine.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and feeds every accepted byte into a CRC engine.
///
/// Only the bytes the inner writer reports as written are fed, so a short write
/// leaves the CRC in step with what actually reached the sink.
///
/// ```rust
/// # use traits::Checksum;
/// # struct Sum(u64);
/// # impl Checksum for Sum {
/// #   type Params = ();
/// #   fn parameters(&self) -> &() { &() }
/// #   fn reset(&mut self) { self.0 = 0; }
/// #   fn update_byte(&mut self, b: u8) { self.0 += u64::from(b); }
/// #   fn value(&self) -> u64 { self.0 }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum(0).writer(Vec::new());
/// writer.write_all(b"hi")?;
/// let (out, engine) = writer.into_parts();
/// assert_eq!(out, b"hi".to_vec());
/// assert_eq!(engine.value(), u64::from(b'h') + u64::from(b'i'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: crate::Checksum> {
  inner: W,
  engine: C,
}

#[cfg(feature = "std")]
impl<W, C: crate::Checksum> ChecksumWriter<W, C> {
  /// Wrap `inner`, feeding `engine` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: W, engine: C) -> Self {
    Self { inner, engine }
  }

  /// Current CRC value of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.engine.value()
  }

  #[inline]
  pub fn engine(&self) -> &C {
    &self.engine
  }

  #[inline]
  pub fn engine_mut(&mut self) -> &mut C {
    &mut self.engine
  }

  /// Unwrap into the inner writer and the engine.
  #[inline]
  pub fn into_parts(self) -> (W, C) {
    (self.inner, self.engine)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, C: crate::Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.engine.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.engine.update(data))
  }
}
