#![no_main]

use libfuzzer_sys::fuzz_target;
use stribog::Streebog512;
use traits::Digest as _;

fuzz_target!(|data: &[u8]| {
  let ours = Streebog512::digest(data);

  use streebog::Digest as _;
  let ref_out = streebog::Streebog512::digest(data);
  let mut expected = [0u8; 64];
  expected.copy_from_slice(&ref_out);
  // The oracle emits the raw little-endian state order.
  expected.reverse();

  assert_eq!(ours, expected);
});
