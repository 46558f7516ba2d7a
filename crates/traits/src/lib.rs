//! Core digest trait for the workspace.
//!
//! This crate provides the [`Digest`] trait that hash implementations conform
//! to, plus std I/O adapters ([`io::DigestReader`], [`io::DigestWriter`]) that
//! compute a digest transparently during reads and writes. It is `no_std`
//! compatible and has zero dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
