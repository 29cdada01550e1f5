//! SHA-1 core hashing functions

use std::path::Path;

use super::H160_INIT;
use super::computations::{all_rounds, expand};
use crate::digest::Sha1Digest;
use crate::error::Result;
use crate::hash::digest_source;
use crate::primitives::MessageBlock;
use crate::source::{BitLengthPolicy, BufferSource, FileSource, MessageSource};

/// Compresses a single 512-bit message block into `state`.
#[inline(always)]
pub fn compress(block: &MessageBlock, state: &mut [u32; 5]) {
    let w = expand(&block.words);
    all_rounds(state, &w);
}

/// Drains `source` and returns the SHA-1 digest of its message.
pub fn compute_from_source<S: MessageSource + ?Sized>(source: &mut S) -> Result<Sha1Digest> {
    digest_source(source, H160_INIT, compress)
}

/// Computes the digest of the first `bit_length` bits of `data`.
///
/// `bit_length` must be a multiple of eight.
pub fn compute_from_buffer(data: &[u8], bit_length: u64) -> Result<Sha1Digest> {
    let mut source = BufferSource::with_bit_length(data, bit_length, BitLengthPolicy::Reject)?;
    compute_from_source(&mut source)
}

/// Computes the digest of all of `data`.
pub fn compute_from_bytes(data: &[u8]) -> Result<Sha1Digest> {
    compute_from_source(&mut BufferSource::new(data)?)
}

/// Computes the digest of the file at `path`.
pub fn compute_from_file(path: impl AsRef<Path>) -> Result<Sha1Digest> {
    compute_from_source(&mut FileSource::open(path)?)
}

/// Computes the SHA-1 hash of the given input.
///
/// # Panics
/// Panics only for inputs beyond 2^61 bytes.
pub fn sha1(input: &[u8]) -> Sha1Digest {
    match compute_from_bytes(input) {
        Ok(digest) => digest,
        Err(e) => panic!("in-memory message cannot be hashed: {e}"),
    }
}
