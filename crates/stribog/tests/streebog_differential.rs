//! Differential tests against the RustCrypto `streebog` oracle.
//!
//! The oracle emits digests in the raw little-endian state order; ours are in
//! the standard's printed order, so oracle outputs are reversed before
//! comparison.

use proptest::prelude::*;
use stribog::{Digest as _, Mode, Streebog256, Streebog512, StreebogCore};

fn streebog512_ref(data: &[u8]) -> [u8; 64] {
  use streebog::Digest as _;
  let out = streebog::Streebog512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes.reverse();
  bytes
}

fn streebog256_ref(data: &[u8]) -> [u8; 32] {
  use streebog::Digest as _;
  let out = streebog::Streebog256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes.reverse();
  bytes
}

proptest! {
  #[test]
  fn streebog512_one_shot_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Streebog512::digest(&data), streebog512_ref(&data));
  }

  #[test]
  fn streebog256_one_shot_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Streebog256::digest(&data), streebog256_ref(&data));
  }

  #[test]
  fn streebog512_streaming_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let expected = streebog512_ref(&data);

    let mut h = Streebog512::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn streebog256_streaming_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let expected = streebog256_ref(&data);

    let mut h = Streebog256::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn core_split_is_equivalent_to_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    split_blocks in 0usize..32,
  ) {
    // Any block-aligned split point s: update(M[..s]) + finalize(M[s..])
    // equals the one-shot digest, with the residue folded through finalize.
    let full_blocks = data.len() / 64;
    let s = 64 * split_blocks.min(full_blocks);
    let aligned = 64 * full_blocks;

    let mut state = StreebogCore::new(Mode::H512);
    state.update(&data[..s]);
    state.update(&data[s..aligned]);
    let lanes = state.finalize(&data[aligned..]);

    prop_assert_eq!(lanes, StreebogCore::one_shot(Mode::H512, &data));
  }

  #[test]
  fn reset_round_trip(
    prefix in proptest::collection::vec(any::<u8>(), 0..512),
    data in proptest::collection::vec(any::<u8>(), 0..512),
  ) {
    let mut h = Streebog256::new();
    h.update(&prefix);
    h.reset();
    h.update(&data);

    prop_assert_eq!(h.finalize(), Streebog256::digest(&data));
  }

  #[test]
  fn finalize_is_idempotent(data in proptest::collection::vec(any::<u8>(), 0..512)) {
    let mut h = Streebog512::new();
    h.update(&data);

    let first = h.finalize();
    prop_assert_eq!(h.finalize(), first);
  }
}
