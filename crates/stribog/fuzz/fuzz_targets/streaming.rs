//! Fuzz target for the streaming digest API.
//!
//! Tests that arbitrary sequences of update calls produce the one-shot
//! digest for both digest sizes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stribog::{Streebog256, Streebog512};
use traits::Digest as _;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming_512(&input.data, &input.chunk_sizes);
  test_streaming_256(&input.data, &input.chunk_sizes);
});

fn test_streaming_512(data: &[u8], chunk_sizes: &[usize]) {
  let expected = Streebog512::digest(data);

  let mut hasher = Streebog512::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(chunk_sizes.len());
      chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.finalize(), expected, "streebog512 streaming mismatch");
}

fn test_streaming_256(data: &[u8], chunk_sizes: &[usize]) {
  let expected = Streebog256::digest(data);

  let mut hasher = Streebog256::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(chunk_sizes.len());
      chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.finalize(), expected, "streebog256 streaming mismatch");
}
