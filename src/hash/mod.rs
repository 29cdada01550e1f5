//! Hash algorithms exposed by the crate.
//!
//! SHA-1 and SHA-256 share one driver: a message source is pulled block by
//! block and every block is folded into the algorithm's state by its
//! compression function.

use log::debug;

use crate::digest::MessageDigest;
use crate::error::Result;
use crate::primitives::MessageBlock;
use crate::source::MessageSource;

pub mod sha1;
pub mod sha256;

/// Re-export of the one-shot convenience functions.
pub use self::sha1::core::sha1;
pub use self::sha256::core::sha256;

/// Pulls every block from `source` through `compress`, starting at `state`.
pub(crate) fn digest_source<S, const N: usize>(
    source: &mut S,
    mut state: [u32; N],
    compress: fn(&MessageBlock, &mut [u32; N]),
) -> Result<MessageDigest<N>>
where
    S: MessageSource + ?Sized,
{
    let mut block = MessageBlock::new();
    let mut blocks = 0u64;

    while source.pull(&mut block)? {
        compress(&block, &mut state);
        blocks += 1;
    }

    debug!("digest of {} bits computed over {blocks} blocks", N * 32);

    Ok(MessageDigest::from_words(state))
}
