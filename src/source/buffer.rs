//! In-memory message source.

use std::slice::ChunksExact;

use log::debug;

use super::padding::Padding;
use super::{BitLengthPolicy, MessageSource};
use crate::error::{Error, Result};
use crate::primitives::{BLOCK_BYTES, MessageBlock};

/// Message source over a borrowed byte slice.
///
/// The slice must outlive the source. Whole 64-byte chunks are emitted
/// directly from the slice; the trailing partial chunk lives in the
/// padding frame.
#[derive(Clone, Debug)]
pub struct BufferSource<'a> {
    blocks: ChunksExact<'a, u8>,
    padding: Padding,
}

impl<'a> BufferSource<'a> {
    /// Creates a source over the whole of `data`.
    ///
    /// # Errors
    /// `Error::LengthOverflow` if the length in bits exceeds 64 bits.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let blocks = data.chunks_exact(BLOCK_BYTES);

        let mut padding = Padding::unpadded();
        padding.compute(blocks.remainder(), data.len() as u64)?;

        debug!("buffer source over {} bytes", data.len());

        Ok(Self { blocks, padding })
    }

    /// Creates a source over the first `bits` bits of `data`.
    ///
    /// Lengths that are not whole bytes are resolved with `policy`. A length
    /// shorter than `data` hashes only the prefix.
    ///
    /// # Errors
    /// - `Error::UnalignedLength` when `policy` refuses the length
    /// - `Error::LengthExceedsBuffer` when `data` is too short
    pub fn with_bit_length(data: &'a [u8], bits: u64, policy: BitLengthPolicy) -> Result<Self> {
        let declared = policy.byte_length(bits)?;

        let len = usize::try_from(declared)
            .ok()
            .filter(|&len| len <= data.len())
            .ok_or(Error::LengthExceedsBuffer {
                declared,
                available: data.len(),
            })?;

        Self::new(&data[..len])
    }
}

impl MessageSource for BufferSource<'_> {
    fn pull(&mut self, block: &mut MessageBlock) -> Result<bool> {
        match self.blocks.next() {
            Some(chunk) => {
                block.load_slice(chunk);
                Ok(true)
            }
            None => Ok(self.padding.next_frame(block)),
        }
    }

    fn blocks_remaining(&self) -> u64 {
        self.blocks.len() as u64 + self.padding.frames_remaining()
    }
}
