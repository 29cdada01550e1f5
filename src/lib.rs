//! Streaming FIPS 180-4 message digests
//!
//! This crate computes SHA-1 and SHA-256 digests of in-memory buffers and
//! files using constant, bounded working memory regardless of input size.
//!
//! The focus is on **clarity, predictability, and auditability**: padding
//! is computed once and explicitly, every block crosses a single trait
//! boundary, and every failure is either a typed error or a loud panic for
//! contract violations.
//!
//! # Module overview
//!
//! - `primitives`
//!   The 512-bit `MessageBlock` and the conversions between host integers
//!   and their big-endian wire form.
//!
//! - `source`
//!   The `MessageSource` trait and its buffer and file implementations.
//!   Sources apply FIPS padding and hand out one block per pull.
//!
//! - `hash`
//!   Per-algorithm round constants, compression functions and the
//!   `compute_from_*` entry points binding a source to a fresh state.
//!
//! - `digest`
//!   The `MessageDigest` value type with strict lowercase hex encoding,
//!   equality, a total order and a null state.
//!
//! - `error`
//!   The crate-wide `Error` type.
//!
//! # Example
//!
//! ```
//! use cryptal_digest::hash::sha256;
//!
//! let digest = sha256::compute_from_bytes(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Scope
//!
//! Keyed constructions (HMAC, KDFs), archive parsing and directory
//! traversal are intentionally left to higher layers.

pub mod digest;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod source;

pub use digest::{MessageDigest, Sha1Digest, Sha256Digest};
pub use error::{Error, Result};
pub use source::{BitLengthPolicy, BufferSource, FileSource, MessageSource};
