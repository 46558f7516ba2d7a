//! Cryptographic digest trait.
//!
//! Streaming updates, idempotent finalize, and reset support.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if
  /// needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct XorDigest(u8);
  /// # impl Digest for XorDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = [u8; 1];
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { [self.0] }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// assert_eq!(XorDigest::digest(b"ab"), [b'a' ^ b'b']);
  /// ```
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
