//! The control examples from GOST R 34.11-2012: one-shot and streaming APIs.
//!
//! Run with: `cargo run --example canonical -p stribog`

use stribog::{Digest as _, Streebog256, Streebog512, StreebogCore, streebog256, streebog512};

/// First control message: 63 ASCII digits.
const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";

fn main() {
  println!("=== GOST R 34.11-2012 Control Examples ===\n");

  one_shot_examples();
  streaming_example();
  lanes_example();
}

fn hex(bytes: &[u8]) -> String {
  bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// One-shot computation of both digest sizes.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let h512 = streebog512(M1);
  println!("streebog512(M1) = {}", hex(&h512));
  assert_eq!(
    hex(&h512),
    "486f64c1917879417fef082b3381a4e211c324f074654c38823a7b76f830ad00\
     fa1fbae42b1285c0352f227524bc9ab16254288dd6863dccd5b9f54a1ad0541b"
  );

  let h256 = streebog256(M1);
  println!("streebog256(M1) = {}", hex(&h256));
  assert_eq!(
    hex(&h256),
    "00557be5e584fd52a449b16b0251d05d27f94ab76cbaa6da890b59d8ef1e159d"
  );

  println!();
}

/// Streaming computation: feed data in arbitrary chunks, result matches
/// one-shot.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Streebog512::new();
  for chunk in M1.chunks(10) {
    hasher.update(chunk);
  }
  let streamed = hasher.finalize();
  assert_eq!(streamed, Streebog512::digest(M1));
  println!("streamed streebog512(M1) matches one-shot\n");
}

/// The block-level state machine exposes the raw chaining block.
fn lanes_example() {
  println!("--- Raw Chaining Lanes ---\n");

  let state = StreebogCore::new(stribog::Mode::H512);
  let lanes = state.finalize(M1);
  // Lane 7 holds the first 16 hex digits of the printed digest.
  assert_eq!(lanes[7], 0x486f_64c1_9178_7941);
  println!("lane 7 = {:016x}", lanes[7]);

  let narrow = Streebog256::digest(M1);
  println!("streebog256(M1)[..8] = {}", hex(&narrow[..8]));
}
