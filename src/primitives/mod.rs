//! Primitive types
//!
//! Low-level building blocks shared by every digest algorithm in the
//! crate:
//! - `MessageBlock`: one 512-bit unit of padded input
//! - `endian`: conversions between host integers and big-endian wire form
//!
//! Both are algorithm-agnostic. SHA-1 and SHA-256 consume the same block
//! layout and differ only in their compression functions.

mod block;
pub mod endian;

pub use block::{BLOCK_BYTES, BLOCK_WORDS, MessageBlock};
