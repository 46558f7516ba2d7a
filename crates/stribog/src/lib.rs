//! GOST R 34.11-2012 ("Streebog") cryptographic hash functions.
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! Two digest sizes are exposed as hasher types implementing
//! [`traits::Digest`]: [`Streebog256`] and [`Streebog512`]. Both run the same
//! compression pipeline and differ only in the initialization vector and the
//! final truncation. The block-level engine is available as [`StreebogCore`]
//! for callers that manage their own buffering.
//!
//! Digest bytes are emitted in the standard's printed order (the 512-bit
//! result as a big-endian number), so the hex rendering of an output matches
//! the control examples published with the standard.
//!
//! # Examples
//!
//! ```
//! use stribog::{Digest as _, Streebog256};
//!
//! let digest = Streebog256::digest(b"012345678901234567890123456789012345678901234567890123456789012");
//! assert_eq!(digest[..4], [0x00, 0x55, 0x7b, 0xe5]);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
mod consts;
#[cfg(feature = "std")]
pub mod io;
mod streebog256;
mod streebog512;
mod table;

pub use compress::{Mode, StreebogCore};
pub use streebog256::{Streebog256, streebog256};
pub use streebog512::{Streebog512, streebog512};
pub use traits::Digest;
