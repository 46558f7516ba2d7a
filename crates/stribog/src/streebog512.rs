//! Streebog-512.

#![allow(clippy::indexing_slicing)] // Fixed-size block buffering

use traits::Digest;

use crate::compress::{Mode, StreebogCore};

const BLOCK_LEN: usize = 64;

/// Streebog-512 hasher.
///
/// Buffers partial blocks internally, so [`update`](Digest::update) accepts
/// arbitrary byte counts. The digest is the full 512-bit chaining block in
/// the standard's printed byte order.
///
/// # Example
///
/// ```
/// use stribog::{Digest as _, Streebog512};
///
/// let mut h = Streebog512::new();
/// h.update(b"hello ");
/// h.update(b"world");
/// assert_eq!(h.finalize(), Streebog512::digest(b"hello world"));
/// ```
#[derive(Clone)]
pub struct Streebog512 {
  core: StreebogCore,
  block: [u8; BLOCK_LEN],
  block_len: usize,
}

impl Default for Streebog512 {
  #[inline]
  fn default() -> Self {
    Self {
      core: StreebogCore::new(Mode::H512),
      block: [0u8; BLOCK_LEN],
      block_len: 0,
    }
  }
}

impl Streebog512 {
  /// Final chaining block as raw little-endian lanes, lane 0 first.
  #[inline]
  #[must_use]
  pub fn finalize_lanes(&self) -> [u64; 8] {
    self.core.finalize(&self.block[..self.block_len])
  }
}

impl Digest for Streebog512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        self.core.absorb(&block);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      self.core.absorb(block);
    }

    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.block_len = rest.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    present(&self.finalize_lanes())
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[inline]
fn present(lanes: &[u64; 8]) -> [u8; 64] {
  let mut out = [0u8; 64];
  for (chunk, lane) in out.as_chunks_mut::<8>().0.iter_mut().zip(lanes.iter().rev()) {
    *chunk = lane.to_be_bytes();
  }
  out
}

/// Hash a complete message to a 512-bit digest in one call.
#[inline]
#[must_use]
pub fn streebog512(data: &[u8]) -> [u8; 64] {
  present(&StreebogCore::one_shot(Mode::H512, data))
}
