//! 512-bit message block
//!
//! A `MessageBlock` is the unit handed from a message source to the
//! compression function: sixteen 32-bit words holding the next 512 bits
//! of padded input, already converted from wire order so that `words[i]`
//! is the big-endian reading of bytes `4i..4i + 4`.
//!
//! Blocks carry no meaning beyond their content and are reused across
//! pulls. Each pull overwrites every word.

use super::endian::{load_into, load_words};

/// Number of bytes in one message block.
pub const BLOCK_BYTES: usize = 64;

/// Number of 32-bit words in one message block.
pub const BLOCK_WORDS: usize = 16;

/// One 512-bit input block addressed as sixteen big-endian words.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBlock {
    pub words: [u32; BLOCK_WORDS],
}

impl MessageBlock {
    /// An all-zero block.
    pub const fn new() -> Self {
        Self {
            words: [0u32; BLOCK_WORDS],
        }
    }

    /// Overwrites the block with 64 bytes of wire data.
    #[inline(always)]
    pub fn load(&mut self, bytes: &[u8; BLOCK_BYTES]) {
        self.words = load_words(bytes);
    }

    /// Overwrites the block from a slice that must be exactly 64 bytes.
    ///
    /// # Panics
    /// Panics if `bytes` is not one block long.
    pub fn load_slice(&mut self, bytes: &[u8]) {
        assert_eq!(bytes.len(), BLOCK_BYTES, "message block requires 64 bytes");
        load_into(bytes, &mut self.words);
    }
}
