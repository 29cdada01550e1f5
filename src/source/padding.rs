//! Message padding shared by every source
//!
//! FIPS 180-4 appends a single `1` bit, a run of zero bits and the
//! original message length (64 bits, big-endian) so that the padded
//! message is a multiple of 512 bits. Only the final partial chunk of the
//! message is affected, so the padding is materialized once into a frame
//! of one or two blocks and emitted after the untouched payload blocks.

use log::trace;

use crate::error::{Error, Result};
use crate::primitives::endian::length_field;
use crate::primitives::{BLOCK_BYTES, MessageBlock};

/// Largest number of payload bits in the final 512-bit chunk that still
/// leaves room for the stop bit and the 64-bit length field.
pub(crate) const SINGLE_FRAME_LIMIT_BITS: u64 = 440;

const STOP_BYTE: u8 = 0x80;

/// Progress through the padding frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PaddingState {
    Unpadded,
    Padded512,
    Padded1024,
    Padded1024And512Read,
    PaddedAndAllRead,
}

/// Owned padding frame plus the state machine that emits it.
#[derive(Clone, Debug)]
pub(crate) struct Padding {
    frame: [[u8; BLOCK_BYTES]; 2],
    state: PaddingState,
}

impl Padding {
    pub(crate) const fn unpadded() -> Self {
        Self {
            frame: [[0u8; BLOCK_BYTES]; 2],
            state: PaddingState::Unpadded,
        }
    }

    /// Builds the padding for a message of `byte_len` bytes.
    ///
    /// `tail` must hold the last `byte_len % 64` bytes of the message, the
    /// part not covered by whole payload blocks.
    ///
    /// # Errors
    /// `Error::LengthOverflow` if the length in bits does not fit in 64 bits.
    pub(crate) fn compute(&mut self, tail: &[u8], byte_len: u64) -> Result<()> {
        let bits = byte_len
            .checked_mul(8)
            .ok_or(Error::LengthOverflow { bytes: byte_len })?;

        assert_eq!(
            tail.len() as u64,
            byte_len % BLOCK_BYTES as u64,
            "padding tail must be the trailing partial chunk"
        );

        let two_frames = bits % 512 > SINGLE_FRAME_LIMIT_BITS;
        let frame_len = if two_frames { 2 * BLOCK_BYTES } else { BLOCK_BYTES };

        self.frame = [[0u8; BLOCK_BYTES]; 2];
        let flat = self.frame.as_flattened_mut();

        flat[..tail.len()].copy_from_slice(tail);
        flat[tail.len()] = STOP_BYTE;
        flat[frame_len - 8..frame_len].copy_from_slice(&length_field(bits));

        self.state = if two_frames {
            PaddingState::Padded1024
        } else {
            PaddingState::Padded512
        };

        trace!("padded {bits}-bit message into {} frame(s)", self.frames_remaining());

        Ok(())
    }

    /// Emits the next padding frame into `block`.
    ///
    /// Returns `false` once every frame has been emitted.
    ///
    /// # Panics
    /// Panics if called before `compute`. Sources always pad on
    /// construction, so reaching this is a bug in the source.
    pub(crate) fn next_frame(&mut self, block: &mut MessageBlock) -> bool {
        let index = match self.state {
            PaddingState::Unpadded => {
                panic!("message source pulled before its padding was computed")
            }
            PaddingState::Padded512 => {
                self.state = PaddingState::PaddedAndAllRead;
                0
            }
            PaddingState::Padded1024 => {
                self.state = PaddingState::Padded1024And512Read;
                0
            }
            PaddingState::Padded1024And512Read => {
                self.state = PaddingState::PaddedAndAllRead;
                1
            }
            PaddingState::PaddedAndAllRead => return false,
        };

        block.load(&self.frame[index]);

        true
    }

    /// Number of padding frames not yet emitted.
    pub(crate) fn frames_remaining(&self) -> u64 {
        match self.state {
            PaddingState::Unpadded | PaddingState::PaddedAndAllRead => 0,
            PaddingState::Padded512 | PaddingState::Padded1024And512Read => 1,
            PaddingState::Padded1024 => 2,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> PaddingState {
        self.state
    }
}
