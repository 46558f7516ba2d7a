//! Block-level compression engine.
//!
//! The state is three 512-bit registers, each held as eight little-endian
//! 64-bit lanes with lane 0 least significant: the chaining value `h`, the
//! bit counter `n`, and the running block sum `sigma`. Message bytes enter
//! the lanes as-is; the only big-endian conversion in the crate is the digest
//! presentation at the output boundary.

#![allow(clippy::indexing_slicing)] // Fixed-size 8-lane blocks; indexing is audited

use crate::consts;
use crate::table::LPS;

/// A 512-bit working block: eight little-endian 64-bit lanes.
pub(crate) type Block = [u64; 8];

const ZERO: Block = [0; 8];

const BLOCK_LEN: usize = 64;

/// Digest size selector.
///
/// Carried as data in the state, not as a type-level distinction: the mode
/// picks the initialization vector and the final truncation, and a single
/// compression path serves both sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
  /// 256-bit digest.
  H256,
  /// 512-bit digest.
  H512,
}

impl Mode {
  #[inline]
  pub(crate) const fn iv(self) -> Block {
    match self {
      Self::H256 => consts::IV_256,
      Self::H512 => consts::IV_512,
    }
  }
}

#[inline(always)]
pub(crate) fn block_lanes(block: &[u8; BLOCK_LEN]) -> Block {
  let mut m = [0u64; 8];
  let (chunks, _) = block.as_chunks::<8>();
  for (lane, chunk) in m.iter_mut().zip(chunks.iter()) {
    *lane = u64::from_le_bytes(*chunk);
  }
  m
}

/// Little-endian 512-bit addition modulo 2^512.
///
/// Carry chain starts at lane 0; overflow out of lane 7 is discarded.
#[inline(always)]
fn add512(acc: &mut Block, x: &Block) {
  let mut carry = 0u64;
  for i in 0..8 {
    let (sum, c1) = acc[i].overflowing_add(x[i]);
    let (sum, c2) = sum.overflowing_add(carry);
    acc[i] = sum;
    carry = u64::from(c1 | c2);
  }
}

/// Add a small scalar into a 512-bit register, propagating carries.
#[inline(always)]
fn add512_u64(acc: &mut Block, x: u64) {
  let (sum, mut carry) = acc[0].overflowing_add(x);
  acc[0] = sum;
  let mut i = 1;
  while carry && i < 8 {
    let (sum, c) = acc[i].overflowing_add(1);
    acc[i] = sum;
    carry = c;
    i += 1;
  }
}

/// Lane-wise XOR of two 512-bit blocks.
#[inline(always)]
fn xor512(l: &Block, r: &Block) -> Block {
  [
    l[0] ^ r[0],
    l[1] ^ r[1],
    l[2] ^ r[2],
    l[3] ^ r[3],
    l[4] ^ r[4],
    l[5] ^ r[5],
    l[6] ^ r[6],
    l[7] ^ r[7],
  ]
}

/// Fused L(P(S(l ^ r))).
///
/// Each output lane j gathers byte j of every input lane through the
/// precomputed table; the emitted code is a straight line of 64 lookups.
#[inline(always)]
fn lpsx(l: &Block, r: &Block) -> Block {
  let x0 = l[0] ^ r[0];
  let x1 = l[1] ^ r[1];
  let x2 = l[2] ^ r[2];
  let x3 = l[3] ^ r[3];
  let x4 = l[4] ^ r[4];
  let x5 = l[5] ^ r[5];
  let x6 = l[6] ^ r[6];
  let x7 = l[7] ^ r[7];

  macro_rules! gather {
    ($j:literal) => {
      LPS[0][(x0 >> (8 * $j)) as usize & 0xff]
        ^ LPS[1][(x1 >> (8 * $j)) as usize & 0xff]
        ^ LPS[2][(x2 >> (8 * $j)) as usize & 0xff]
        ^ LPS[3][(x3 >> (8 * $j)) as usize & 0xff]
        ^ LPS[4][(x4 >> (8 * $j)) as usize & 0xff]
        ^ LPS[5][(x5 >> (8 * $j)) as usize & 0xff]
        ^ LPS[6][(x6 >> (8 * $j)) as usize & 0xff]
        ^ LPS[7][(x7 >> (8 * $j)) as usize & 0xff]
    };
  }

  [
    gather!(0),
    gather!(1),
    gather!(2),
    gather!(3),
    gather!(4),
    gather!(5),
    gather!(6),
    gather!(7),
  ]
}

/// One application of the compression function g.
///
/// Runs the twelve-round keyed permutation E with the key schedule folded in,
/// then the feed-forward `h ^ E ^ m`. `n` is the counter key; the two
/// terminal compressions pass the zero block instead.
#[inline(always)]
fn g(h: &Block, n: &Block, m: &Block) -> Block {
  let mut k = lpsx(h, n);
  let mut t = lpsx(&k, m);
  k = lpsx(&k, &consts::C[0]);

  macro_rules! round {
    ($i:literal) => {
      t = lpsx(&k, &t);
      k = lpsx(&k, &consts::C[$i]);
    };
  }

  round!(1);
  round!(2);
  round!(3);
  round!(4);
  round!(5);
  round!(6);
  round!(7);
  round!(8);
  round!(9);
  round!(10);
  round!(11);

  // E ends with a plain key XOR; then the h ^ E ^ m feed-forward.
  let e = xor512(&t, &k);
  xor512(&xor512(&e, h), m)
}

/// Block-level Streebog state machine.
///
/// Owns `(h, n, sigma)` and nothing else; every operation is a pure function
/// of the state, its inputs, and the constant tables. `update` accepts whole
/// 64-byte blocks only - callers that cannot guarantee block-aligned chunks
/// buffer the residue and hand it to [`finalize`](Self::finalize). The
/// [`Streebog256`](crate::Streebog256) / [`Streebog512`](crate::Streebog512)
/// wrappers do exactly that.
#[derive(Clone)]
pub struct StreebogCore {
  mode: Mode,
  h: Block,
  n: Block,
  sigma: Block,
}

impl StreebogCore {
  /// Create a fresh state for the given digest size.
  #[inline]
  #[must_use]
  pub const fn new(mode: Mode) -> Self {
    Self {
      mode,
      h: mode.iv(),
      n: ZERO,
      sigma: ZERO,
    }
  }

  /// The digest size this state was constructed for.
  #[inline]
  #[must_use]
  pub const fn mode(&self) -> Mode {
    self.mode
  }

  /// Restore the just-constructed state for the same mode.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::new(self.mode);
  }

  /// Absorb whole 64-byte blocks.
  ///
  /// `data.len()` must be a multiple of 64; a trailing partial block is
  /// rejected in debug builds and ignored otherwise.
  pub fn update(&mut self, data: &[u8]) {
    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    debug_assert!(rest.is_empty(), "update requires whole 64-byte blocks");
    for block in blocks {
      self.absorb(block);
    }
  }

  #[inline(always)]
  pub(crate) fn absorb(&mut self, block: &[u8; BLOCK_LEN]) {
    let m = block_lanes(block);
    self.h = g(&self.h, &self.n, &m);
    add512_u64(&mut self.n, 512);
    add512(&mut self.sigma, &m);
  }

  /// Fold in the final partial block and run the two terminal compressions.
  ///
  /// `tail.len()` must be below 64. Returns the final chaining block as
  /// little-endian lanes, lane 0 first: the whole block is the 512-bit
  /// digest, the upper half (lanes 4..7) the 256-bit digest. Does not
  /// consume the state - further `update` calls continue the original
  /// stream.
  #[must_use]
  pub fn finalize(&self, tail: &[u8]) -> [u64; 8] {
    debug_assert!(tail.len() < BLOCK_LEN, "tail must be shorter than one block");
    let r = tail.len().min(BLOCK_LEN - 1);
    let mut pad = [0u8; BLOCK_LEN];
    pad[..r].copy_from_slice(&tail[..r]);
    pad[r] = 0x01;
    let m = block_lanes(&pad);

    let mut h = g(&self.h, &self.n, &m);
    let mut n = self.n;
    add512_u64(&mut n, 8 * r as u64);
    let mut sigma = self.sigma;
    add512(&mut sigma, &m);

    h = g(&h, &ZERO, &n);
    g(&h, &ZERO, &sigma)
  }

  /// Hash a complete message in one call.
  #[must_use]
  pub fn one_shot(mode: Mode, data: &[u8]) -> [u64; 8] {
    let split = data.len() - data.len() % BLOCK_LEN;
    let mut state = Self::new(mode);
    state.update(&data[..split]);
    state.finalize(&data[split..])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add512_wraps_modulo_2_512() {
    let mut acc = [u64::MAX; 8];
    add512(&mut acc, &[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(acc, [0; 8]);
  }

  #[test]
  fn add512_u64_propagates_carries() {
    let mut n = [u64::MAX, 0, 0, 0, 0, 0, 0, 0];
    add512_u64(&mut n, 512);
    assert_eq!(n, [511, 1, 0, 0, 0, 0, 0, 0]);

    let mut n = [u64::MAX; 8];
    add512_u64(&mut n, 1);
    assert_eq!(n, [0; 8]);
  }

  #[test]
  fn g_known_value() {
    // First compression of the standard's 63-digit control message in the
    // 512-bit mode: h = IV, n = 0, m = padded message.
    let mut pad = [0u8; 64];
    pad[..63].copy_from_slice(b"012345678901234567890123456789012345678901234567890123456789012");
    pad[63] = 0x01;
    let m = block_lanes(&pad);

    let h = g(&ZERO, &ZERO, &m);
    assert_eq!(h, [
      0x05fe_e473_6b3b_dae2,
      0x9541_3579_3fb1_f5d9,
      0xd3ed_0f52_2c50_815c,
      0x2754_f690_8cbb_bac5,
      0x2648_8adb_3373_8ebd,
      0x17a8_6641_445a_a9a6,
      0x91ea_34af_2139_4f38,
      0xfd10_2cf8_812c_cb11,
    ]);
  }

  #[test]
  fn counter_and_sum_track_absorbed_blocks() {
    let block = [0xa5u8; 64];
    let mut state = StreebogCore::new(Mode::H512);
    state.update(&block);
    state.update(&block);

    assert_eq!(state.n[0], 1024);
    assert_eq!(state.n[1..], [0; 7]);

    let m = block_lanes(&block);
    let mut sum = [0u64; 8];
    add512(&mut sum, &m);
    add512(&mut sum, &m);
    assert_eq!(state.sigma, sum);
  }

  #[test]
  fn one_shot_matches_manual_splits() {
    let data: [u8; 200] = core::array::from_fn(|i| i as u8);
    let expected = StreebogCore::one_shot(Mode::H256, &data);

    for split in [0, 64, 128] {
      let mut state = StreebogCore::new(Mode::H256);
      state.update(&data[..split]);
      let mut rest = &data[split..];
      while rest.len() >= 64 {
        state.update(&rest[..64]);
        rest = &rest[64..];
      }
      assert_eq!(state.finalize(rest), expected, "split={split}");
    }
  }

  #[test]
  fn finalize_does_not_consume() {
    let mut state = StreebogCore::new(Mode::H512);
    state.update(&[0x17u8; 128]);

    let first = state.finalize(b"tail");
    assert_eq!(state.finalize(b"tail"), first);

    // The state is still live: absorbing more data changes the outcome.
    state.update(&[0u8; 64]);
    assert_ne!(state.finalize(b"tail"), first);
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut state = StreebogCore::new(Mode::H256);
    state.update(&[0x42u8; 192]);
    state.reset();

    let fresh = StreebogCore::new(Mode::H256);
    assert_eq!(state.finalize(&[]), fresh.finalize(&[]));
    assert_eq!(state.mode(), Mode::H256);
  }
}
