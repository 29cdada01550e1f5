//! Message sources
//!
//! A message source turns a finite byte sequence into the padded stream of
//! 512-bit blocks consumed by the compression functions. Two variants are
//! provided:
//!
//! - [`BufferSource`]
//!   Borrows a caller-owned byte slice. Construction is O(1) beyond the
//!   padding computation and pulls never fail.
//!
//! - [`FileSource`]
//!   Reads whole blocks lazily from an open file. Only the trailing partial
//!   chunk is read at construction, to build the padding.
//!
//! Both compose the same padding state machine, which is computed eagerly
//! when the source is built. Sources are single-use: once the last padding
//! frame is emitted every further pull reports exhaustion.

mod buffer;
mod file;
mod padding;

pub use buffer::BufferSource;
pub use file::{FILE_READ_CAPACITY, FileSource};

use crate::error::{Error, Result};
use crate::primitives::MessageBlock;

/// Producer of padded 512-bit message blocks.
pub trait MessageSource {
    /// Writes the next block into `block`.
    ///
    /// Returns `Ok(true)` when a block was produced and `Ok(false)` once the
    /// padded message is exhausted. File-backed sources report read failures
    /// as errors; such an error ends the computation.
    fn pull(&mut self, block: &mut MessageBlock) -> Result<bool>;

    /// Number of blocks still to be produced, padding included.
    fn blocks_remaining(&self) -> u64;
}

/// How a bit length that is not a multiple of eight is treated.
///
/// Only whole bytes are ever hashed. The padding always encodes the byte
/// count times eight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BitLengthPolicy {
    /// Refuse lengths with a partial trailing byte.
    #[default]
    Reject,

    /// Include the byte holding the trailing bits in full.
    RoundUp,
}

impl BitLengthPolicy {
    /// Resolves a bit length into the number of bytes to hash.
    ///
    /// # Errors
    /// `Error::UnalignedLength` under `Reject` when `bits % 8 != 0`.
    pub fn byte_length(self, bits: u64) -> Result<u64> {
        match (self, bits % 8) {
            (_, 0) => Ok(bits / 8),
            (Self::Reject, _) => Err(Error::UnalignedLength { bits }),
            (Self::RoundUp, _) => Ok(bits / 8 + 1),
        }
    }
}
