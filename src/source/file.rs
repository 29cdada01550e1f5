//! File-backed message source.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use super::MessageSource;
use super::padding::Padding;
use crate::error::{Error, Result};
use crate::primitives::{BLOCK_BYTES, MessageBlock};

/// Capacity of the read buffer placed in front of the file.
pub const FILE_READ_CAPACITY: usize = 64 * 1024;

/// Message source reading whole blocks lazily from a file.
///
/// The message length is taken from the file metadata at construction and
/// the trailing partial chunk is read right away to build the padding.
/// Whole blocks are read on demand. Before the first padding frame is
/// emitted the source checks that the file still ends where construction
/// saw it end: a shorter file fails with `Error::ShortRead`, a longer one
/// (including files whose metadata reports no size, such as procfs
/// entries) with `Error::LengthMismatch`, and a changed tail with
/// `Error::ContentChanged`.
///
/// The file handle is closed when the source is dropped.
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
    blocks_left: u64,
    consumed: u64,
    declared: u64,
    tail: [u8; BLOCK_BYTES],
    tail_len: usize,
    end_verified: bool,
    padding: Padding,
}

impl FileSource {
    /// Opens `path` and prepares to hash its entire content.
    ///
    /// # Errors
    /// `Error::Open` if the file cannot be opened, plus every error of
    /// [`FileSource::from_file`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("file source for '{}'", path.display());

        Self::from_file(file)
    }

    /// Hashes `file` from its current position to its end.
    ///
    /// To hash the same handle twice, seek it back before building the
    /// second source.
    ///
    /// # Errors
    /// - `Error::Read` if the position, metadata or tail cannot be read
    /// - `Error::ShortRead` if the file is shorter than its metadata claims
    /// - `Error::LengthOverflow` for lengths beyond 2^64 - 1 bits
    pub fn from_file(mut file: File) -> Result<Self> {
        let start = file.stream_position().map_err(read_error)?;
        let end = file.metadata().map_err(read_error)?.len();

        let declared = end.saturating_sub(start);
        let tail_len = (declared % BLOCK_BYTES as u64) as usize;
        let whole = declared - tail_len as u64;

        let mut tail = [0u8; BLOCK_BYTES];

        file.seek(SeekFrom::Start(start + whole)).map_err(read_error)?;
        fill(&mut file, &mut tail[..tail_len], whole, declared)?;
        file.seek(SeekFrom::Start(start)).map_err(read_error)?;

        let mut padding = Padding::unpadded();
        padding.compute(&tail[..tail_len], declared)?;

        debug!("file source over {declared} bytes starting at offset {start}");

        Ok(Self {
            reader: BufReader::with_capacity(FILE_READ_CAPACITY, file),
            blocks_left: whole / BLOCK_BYTES as u64,
            consumed: 0,
            declared,
            tail,
            tail_len,
            end_verified: false,
            padding,
        })
    }

    /// Reads past the whole blocks and checks the file still ends with the
    /// tail cached at construction.
    fn verify_end(&mut self) -> Result<()> {
        let mut tail = [0u8; BLOCK_BYTES];
        let tail = &mut tail[..self.tail_len];
        fill(&mut self.reader, tail, self.consumed, self.declared)?;

        if *tail != self.tail[..self.tail_len] {
            return Err(Error::ContentChanged {
                offset: self.consumed,
            });
        }

        let mut rest = (&mut self.reader).take(FILE_READ_CAPACITY as u64);
        let surplus = io::copy(&mut rest, &mut io::sink()).map_err(read_error)?;

        if surplus > 0 {
            return Err(Error::LengthMismatch {
                expected: self.declared,
                found: self.declared + surplus,
            });
        }

        self.end_verified = true;

        Ok(())
    }
}

impl MessageSource for FileSource {
    fn pull(&mut self, block: &mut MessageBlock) -> Result<bool> {
        if self.blocks_left == 0 {
            if !self.end_verified {
                self.verify_end()?;
            }

            return Ok(self.padding.next_frame(block));
        }

        let mut bytes = [0u8; BLOCK_BYTES];
        fill(&mut self.reader, &mut bytes, self.consumed, self.declared)?;

        self.blocks_left -= 1;
        self.consumed += BLOCK_BYTES as u64;
        block.load(&bytes);

        Ok(true)
    }

    fn blocks_remaining(&self) -> u64 {
        self.blocks_left + self.padding.frames_remaining()
    }
}

fn read_error(source: io::Error) -> Error {
    Error::Read { source }
}

/// Fills `buf` from `reader`, which is positioned `offset` bytes into the
/// message.
///
/// A premature end of file is reported as `Error::ShortRead` carrying the
/// number of message bytes actually present.
fn fill(reader: &mut impl Read, buf: &mut [u8], offset: u64, declared: u64) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::ShortRead {
                    expected: declared,
                    read: offset + filled as u64,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(Error::Read { source }),
        }
    }

    Ok(())
}
