//! Streebog (GOST R 34.11-2012) file digest tool.
//!
//! ```text
//! streebog-sum [--256 | --512] <path>
//! ```
//!
//! Streams the file (or stdin for `-`) through the hasher and prints the
//! digest in the standard's big-endian hex form, followed by the path. I/O
//! and argument failures go to stderr with a non-zero exit code; nothing is
//! written to stdout in that case.

use std::{
  env,
  fmt::Write as _,
  fs::File,
  io::{self, Read},
  process::ExitCode,
};

use stribog::{Streebog256, Streebog512};
use traits::Digest as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DigestSize {
  Bits256,
  Bits512,
}

#[derive(Clone, Debug)]
struct Args {
  size: DigestSize,
  path: String,
}

fn parse_args() -> Result<Args, String> {
  let mut size = DigestSize::Bits256;
  let mut path = None;

  for arg in env::args().skip(1) {
    if arg == "--256" {
      size = DigestSize::Bits256;
    } else if arg == "--512" {
      size = DigestSize::Bits512;
    } else if arg == "--help" || arg == "-h" {
      print_help();
      return Err(String::new());
    } else if arg.starts_with("--") {
      return Err(format!("unknown option: {arg}"));
    } else if path.replace(arg).is_some() {
      return Err("expected exactly one input path".to_owned());
    }
  }

  let Some(path) = path else {
    return Err("missing input path (use `-` for stdin)".to_owned());
  };

  Ok(Args { size, path })
}

fn print_help() {
  eprintln!(
    "\
streebog-sum: GOST R 34.11-2012 (Streebog) digest of a file

Usage: streebog-sum [--256 | --512] <path>

Options:
  --256        256-bit digest (default)
  --512        512-bit digest
  -h, --help   Show this help

Reads from stdin when <path> is `-`."
  );
}

fn run(args: &Args) -> Result<String, String> {
  let input: Box<dyn Read> = if args.path == "-" {
    Box::new(io::stdin().lock())
  } else {
    Box::new(File::open(&args.path).map_err(|e| format!("{}: {e}", args.path))?)
  };

  let digest = match args.size {
    DigestSize::Bits256 => {
      let mut reader = Streebog256::reader(input);
      io::copy(&mut reader, &mut io::sink()).map_err(|e| format!("{}: {e}", args.path))?;
      to_hex(&reader.digest())
    }
    DigestSize::Bits512 => {
      let mut reader = Streebog512::reader(input);
      io::copy(&mut reader, &mut io::sink()).map_err(|e| format!("{}: {e}", args.path))?;
      to_hex(&reader.digest())
    }
  };

  Ok(digest)
}

fn to_hex(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len() * 2);
  for b in bytes {
    let _ = write!(out, "{b:02x}");
  }
  out
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("streebog-sum: {msg}");
      return ExitCode::FAILURE;
    }
  };

  match run(&args) {
    Ok(digest) => {
      println!("{digest}  {}", args.path);
      ExitCode::SUCCESS
    }
    Err(msg) => {
      eprintln!("streebog-sum: {msg}");
      ExitCode::FAILURE
    }
  }
}
