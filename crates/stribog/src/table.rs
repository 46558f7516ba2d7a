//! Compile-time generation of the fused LPS lookup table.
//!
//! Entry `[i][b]` collapses the S-box substitution of byte value `b`, its P
//! shuffle out of lane `i`, and the L matrix multiplication into one 64-bit
//! word. LPS over a full 512-bit state then costs eight table gathers and
//! seven XORs per output lane instead of 64 bit-conditional XORs per byte.

#![allow(clippy::indexing_slicing)] // Fixed-size tables built with const while loops

use crate::consts::{A, PI};

/// Generate the 8 x 256 fused table.
///
/// `[i][b]` is the XOR of the matrix rows `A[63 - k - 8*i]` selected by the
/// set bits k of `PI[b]`: the L image of byte value b sitting in lane i after
/// substitution, every other lane zero.
const fn generate_lps_table() -> [[u64; 256]; 8] {
  let mut table = [[0u64; 256]; 8];
  let mut i = 0;
  while i < 8 {
    let mut b = 0;
    while b < 256 {
      let s = PI[b];
      let mut acc = 0u64;
      let mut k = 0;
      while k < 8 {
        if (s >> k) & 1 != 0 {
          acc ^= A[63 - k - 8 * i];
        }
        k += 1;
      }
      table[i][b] = acc;
      b += 1;
    }
    i += 1;
  }
  table
}

/// Process-lifetime fused LPS table (16 KiB), materialized at compile time.
pub(crate) static LPS: [[u64; 256]; 8] = generate_lps_table();

#[cfg(test)]
mod tests {
  use super::*;

  fn xorshift64star(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
  }

  // The standard's S, P, L applied one after another, written naively.
  fn naive_lps(lanes: [u64; 8]) -> [u64; 8] {
    let mut bytes = [0u8; 64];
    for (chunk, lane) in bytes.as_chunks_mut::<8>().0.iter_mut().zip(lanes.iter()) {
      *chunk = lane.to_le_bytes();
    }
    for b in &mut bytes {
      *b = PI[*b as usize];
    }
    // P transposes the state viewed as an 8x8 byte matrix.
    let mut shuffled = [0u8; 64];
    for i in 0..8 {
      for j in 0..8 {
        shuffled[8 * i + j] = bytes[8 * j + i];
      }
    }
    let mut out = [0u64; 8];
    for (lane, chunk) in out.iter_mut().zip(shuffled.as_chunks::<8>().0.iter()) {
      let v = u64::from_le_bytes(*chunk);
      let mut acc = 0u64;
      for k in 0..64 {
        if (v >> k) & 1 == 1 {
          acc ^= A[63 - k];
        }
      }
      *lane = acc;
    }
    out
  }

  fn fused_lps(lanes: [u64; 8]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for (j, lane) in out.iter_mut().enumerate() {
      let mut acc = 0u64;
      for i in 0..8 {
        acc ^= LPS[i][((lanes[i] >> (8 * j)) & 0xff) as usize];
      }
      *lane = acc;
    }
    out
  }

  #[test]
  fn spot_values() {
    assert_eq!(LPS[0][0x00], 0xd01f_715b_5c7e_f8e6);
    assert_eq!(LPS[1][0x00], 0xde55_3f8c_05a8_11c8);
    assert_eq!(LPS[3][0x80], 0x62f8_42bf_c771_fb90);
    assert_eq!(LPS[5][0x11], 0x1dd7_78ab_8b74_edaf);
    assert_eq!(LPS[7][0xff], 0xd6a3_0f25_8c15_3427);
  }

  #[test]
  fn matches_naive_s_p_l() {
    let mut seed = 0x0123_4567_89ab_cdef;
    for _ in 0..64 {
      let mut lanes = [0u64; 8];
      for lane in &mut lanes {
        *lane = xorshift64star(&mut seed);
      }
      assert_eq!(fused_lps(lanes), naive_lps(lanes));
    }
    // All-zero and all-ones states exercise the table edges.
    assert_eq!(fused_lps([0; 8]), naive_lps([0; 8]));
    assert_eq!(fused_lps([u64::MAX; 8]), naive_lps([u64::MAX; 8]));
  }
}
