//! I/O adapters for digest computation.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations to compute a digest transparently
//! during I/O operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use stribog::Streebog512;
//! use std::fs::File;
//!
//! let file = File::open("data.bin")?;
//! let mut reader = Streebog512::reader(file);
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! let digest = reader.digest();
//! ```

use crate::Digest;

/// Wraps a [`Read`](std::io::Read) and computes a digest transparently.
///
/// All reads pass through to the inner reader while updating the digest with
/// the bytes actually read (short reads are handled).
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  ///
  /// This does not consume the reader or finalize the hasher - further reads
  /// will continue updating the digest.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestReader`, returning the inner reader.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, D: Digest> std::io::Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      let to_hash = remaining.min(buf.len());
      if to_hash > 0 {
        if let Some(data) = buf.get(..to_hash) {
          self.hasher.update(data);
        }
        remaining -= to_hash;
      } else {
        break;
      }
    }
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a digest transparently.
///
/// The digest is updated **before** writing to the inner writer, so on a
/// failed write the caller knows exactly what was hashed vs what was written.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `DigestWriter`, returning the inner writer.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, D: Digest> std::io::Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.hasher.update(buf);
    self.inner.write(buf)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    for buf in bufs {
      self.hasher.update(buf);
    }
    self.inner.write_vectored(bufs)
  }
}
