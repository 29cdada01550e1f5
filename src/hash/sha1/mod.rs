//! SHA-1 (FIPS 180-4, section 6.1)
//!
//! Shares the block layout and padding of SHA-256; only the state width,
//! the 80-word schedule and the round functions differ.

mod computations;
pub mod core;

pub use self::core::{compress, compute_from_buffer, compute_from_bytes, compute_from_file, compute_from_source, sha1};

/// Initial hash value H(0).
pub const H160_INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants, one per group of twenty rounds.
pub const K160: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];
