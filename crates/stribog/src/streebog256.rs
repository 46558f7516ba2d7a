//! Streebog-256.
//!
//! Same pipeline as [`Streebog512`](crate::Streebog512) with the all-0x01
//! initialization vector; the digest is the upper half (lanes 4..7) of the
//! final chaining block.

#![allow(clippy::indexing_slicing)] // Fixed-size block buffering

use traits::Digest;

use crate::compress::{Mode, StreebogCore};

const BLOCK_LEN: usize = 64;

/// Streebog-256 hasher.
#[derive(Clone)]
pub struct Streebog256 {
  core: StreebogCore,
  block: [u8; BLOCK_LEN],
  block_len: usize,
}

impl Default for Streebog256 {
  #[inline]
  fn default() -> Self {
    Self {
      core: StreebogCore::new(Mode::H256),
      block: [0u8; BLOCK_LEN],
      block_len: 0,
    }
  }
}

impl Streebog256 {
  /// Final chaining block as raw little-endian lanes, lane 0 first.
  ///
  /// The 256-bit digest is the presentation of lanes 4..7.
  #[inline]
  #[must_use]
  pub fn finalize_lanes(&self) -> [u64; 8] {
    self.core.finalize(&self.block[..self.block_len])
  }
}

impl Digest for Streebog256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

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
fn present(lanes: &[u64; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  for (chunk, lane) in out.as_chunks_mut::<8>().0.iter_mut().zip(lanes[4..].iter().rev()) {
    *chunk = lane.to_be_bytes();
  }
  out
}

/// Hash a complete message to a 256-bit digest in one call.
#[inline]
#[must_use]
pub fn streebog256(data: &[u8]) -> [u8; 32] {
  present(&StreebogCore::one_shot(Mode::H256, data))
}
