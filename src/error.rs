//! Error types for digest computation.
//!
//! Errors fall into three groups:
//! - construction errors, raised before any block is produced
//! - stream errors, raised by file-backed sources in the middle of a pull
//! - format errors, raised when parsing a digest from text
//!
//! Contract violations (such as pulling from a source whose padding was
//! never computed) are not represented here. They panic.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The message length in bits does not fit the 64-bit length field.
    #[error("message of {bytes} bytes exceeds the 2^64 - 1 bit length limit")]
    LengthOverflow { bytes: u64 },

    /// A bit length that is not a multiple of eight was refused.
    #[error("bit length {bits} is not a whole number of bytes")]
    UnalignedLength { bits: u64 },

    /// The declared length is larger than the supplied buffer.
    #[error("declared length of {declared} bytes exceeds the {available} bytes supplied")]
    LengthExceedsBuffer { declared: u64, available: usize },

    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read message data: {source}")]
    Read { source: io::Error },

    /// The file ended before its declared length was consumed.
    #[error("message data ended after {read} of {expected} bytes")]
    ShortRead { expected: u64, read: u64 },

    /// The file held more data than construction measured, for example
    /// because it grew or because its metadata reports no size.
    #[error("message data holds at least {found} bytes, expected {expected}")]
    LengthMismatch { expected: u64, found: u64 },

    /// The trailing bytes no longer match those read at construction.
    #[error("message data changed at offset {offset} while it was being hashed")]
    ContentChanged { offset: u64 },

    #[error("invalid digest format: {reason}")]
    InvalidFormat { reason: String },
}

impl Error {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
