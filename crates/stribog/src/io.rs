//! I/O adapters for streaming digests.
//!
//! Re-exports [`DigestReader`] and [`DigestWriter`], which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations to compute a
//! digest transparently during I/O. Only bytes actually transferred are
//! hashed, so short reads are handled correctly.
//!
//! # Example
//!
//! ```rust,ignore
//! use stribog::{Digest as _, Streebog512};
//! use std::fs::File;
//!
//! let file = File::open("data.bin")?;
//! let mut reader = Streebog512::reader(file);
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! println!("{:02x?}", reader.digest());
//! ```

pub use traits::io::{DigestReader, DigestWriter};
