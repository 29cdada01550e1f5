//! SHA-256 core hashing functions
//!
//! This module implements the SHA-256 compression step and the entry
//! points that bind a message source to a fresh hash state.
//!
//! It provides:
//! - the compression function operating on 512-bit message blocks
//! - digest computation from a buffer, a file or any `MessageSource`

use std::path::Path;

use super::H256_INIT;
use super::computations::{all_rounds, expand};
use crate::digest::Sha256Digest;
use crate::error::Result;
use crate::hash::digest_source;
use crate::primitives::MessageBlock;
use crate::source::{BitLengthPolicy, BufferSource, FileSource, MessageSource};

/// Compresses a single 512-bit message block into `state`.
///
/// # Notes
/// - The block words are already in big-endian interpretation.
/// - The schedule is private to this call, so `block` may be overwritten
///   as soon as it returns.
#[inline(always)]
pub fn compress(block: &MessageBlock, state: &mut [u32; 8]) {
    let w = expand(&block.words);
    all_rounds(state, &w);
}

/// Drains `source` and returns the SHA-256 digest of its message.
///
/// # Errors
/// Propagates stream errors from the source.
pub fn compute_from_source<S: MessageSource + ?Sized>(source: &mut S) -> Result<Sha256Digest> {
    digest_source(source, H256_INIT, compress)
}

/// Computes the digest of the first `bit_length` bits of `data`.
///
/// `bit_length` must be a multiple of eight; see
/// [`BufferSource::with_bit_length`] to choose another policy.
pub fn compute_from_buffer(data: &[u8], bit_length: u64) -> Result<Sha256Digest> {
    let mut source = BufferSource::with_bit_length(data, bit_length, BitLengthPolicy::Reject)?;
    compute_from_source(&mut source)
}

/// Computes the digest of all of `data`.
pub fn compute_from_bytes(data: &[u8]) -> Result<Sha256Digest> {
    compute_from_source(&mut BufferSource::new(data)?)
}

/// Computes the digest of the file at `path`.
///
/// An empty file yields the digest of the empty message; a file that
/// cannot be opened yields `Error::Open`.
pub fn compute_from_file(path: impl AsRef<Path>) -> Result<Sha256Digest> {
    compute_from_source(&mut FileSource::open(path)?)
}

/// Computes the SHA-256 hash of the given input.
///
/// # Panics
/// Panics only for inputs beyond 2^61 bytes, which no addressable slice
/// reaches in practice.
pub fn sha256(input: &[u8]) -> Sha256Digest {
    match compute_from_bytes(input) {
        Ok(digest) => digest,
        Err(e) => panic!("in-memory message cannot be hashed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_single_padded_block() {
        let mut source = BufferSource::new(b"abc").unwrap();
        let mut block = MessageBlock::new();
        source.pull(&mut block).unwrap();

        let mut state = H256_INIT;
        compress(&block, &mut state);
        assert_eq!(state[0], 0xba7816bf);
        assert_eq!(state[7], 0xf20015ad);
    }

    #[test]
    fn one_shot_matches_source() {
        let data = [0x5au8; 300];
        assert_eq!(sha256(&data), compute_from_bytes(&data).unwrap());
    }
}
