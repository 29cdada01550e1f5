//! Message digest values
//!
//! A [`MessageDigest`] is the final hash state of an algorithm, stored as
//! its `N` 32-bit words in big-endian conceptual order: word 0 is the most
//! significant and is printed first.
//!
//! The textual form is fixed-width lowercase hexadecimal, eight characters
//! per word. Parsing is strict and accepts nothing else: no uppercase
//! digits, no prefix, no surrounding whitespace.
//!
//! Equality and ordering compare the word sequences lexicographically,
//! which gives a total order suitable for sorting and set membership.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::primitives::endian::{load_into, store_words};

/// Fixed-size digest made of `N` 32-bit words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageDigest<const N: usize> {
    words: [u32; N],
}

/// SHA-1 digest (160 bits).
pub type Sha1Digest = MessageDigest<5>;

/// SHA-256 digest (256 bits).
pub type Sha256Digest = MessageDigest<8>;

impl<const N: usize> MessageDigest<N> {
    /// Length of the hexadecimal representation.
    pub const HEX_LEN: usize = N * 8;

    /// Wraps a final hash state.
    pub const fn from_words(words: [u32; N]) -> Self {
        Self { words }
    }

    pub const fn words(&self) -> &[u32; N] {
        &self.words
    }

    /// Serializes the digest into `4 * N` big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; N * 4];
        store_words(&self.words, &mut out);
        out
    }

    /// Lowercase, zero-padded hexadecimal representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parses a digest from its lowercase hexadecimal representation.
    ///
    /// # Errors
    /// `Error::InvalidFormat` if `input` is not exactly [`Self::HEX_LEN`]
    /// characters of `[0-9a-f]`.
    pub fn from_hex(input: &str) -> Result<Self> {
        if input.len() != Self::HEX_LEN {
            return Err(Error::invalid_format(format!(
                "expected {} hex characters, found {}",
                Self::HEX_LEN,
                input.len()
            )));
        }

        if let Some((position, found)) = input
            .char_indices()
            .find(|&(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(Error::invalid_format(format!(
                "character {found:?} at position {position} is not a lowercase hex digit"
            )));
        }

        let bytes = hex::decode(input).map_err(|e| Error::invalid_format(e.to_string()))?;

        let mut words = [0u32; N];
        load_into(&bytes, &mut words);

        Ok(Self { words })
    }

    /// Returns `true` if every bit of the digest is zero.
    pub fn is_null(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Clears every bit of the digest.
    pub fn set_to_null(&mut self) {
        self.words = [0u32; N];
    }
}

impl<const N: usize> Display for MessageDigest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> FromStr for MessageDigest<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl<const N: usize> From<MessageDigest<N>> for [u32; N] {
    fn from(digest: MessageDigest<N>) -> Self {
        digest.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn display_matches_to_hex() {
        let d = Sha1Digest::from_words([0x0000_0001, 0xabcd_ef00, 0, 0xffff_ffff, 0x10]);
        assert_eq!(d.to_hex(), "00000001abcdef0000000000ffffffff00000010");
        assert_eq!(d.to_string(), d.to_hex());
        assert_eq!(format!("{d}"), "00000001abcdef0000000000ffffffff00000010");
    }

    #[test]
    fn parses_known_digest() {
        let d: Sha256Digest = ABC_SHA256.parse().unwrap();
        assert_eq!(d.words()[0], 0xba78_16bf);
        assert_eq!(d.words()[7], 0xf200_15ad);
        assert_eq!(d.to_hex(), ABC_SHA256);
        assert_eq!(d.to_bytes()[..4], [0xba, 0x78, 0x16, 0xbf]);
    }

    #[test]
    fn rejects_uppercase_and_wrong_width() {
        assert!(Sha256Digest::from_hex(&ABC_SHA256.to_uppercase()).is_err());
        assert!(Sha256Digest::from_hex(&ABC_SHA256[1..]).is_err());
        assert!(Sha1Digest::from_hex(ABC_SHA256).is_err());
        assert!(Sha1Digest::from_hex("").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        let mut s = ABC_SHA256.to_string();
        s.replace_range(10..11, "g");
        let err = Sha256Digest::from_hex(&s).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        assert!(err.to_string().contains("position 10"));

        // multi-byte character with matching byte length
        let s = format!("é{}", &ABC_SHA256[2..]);
        assert_eq!(s.len(), 64);
        assert!(Sha256Digest::from_hex(&s).is_err());
    }

    #[test]
    fn null_state() {
        let mut d: Sha256Digest = ABC_SHA256.parse().unwrap();
        assert!(!d.is_null());
        d.set_to_null();
        assert!(d.is_null());
        assert_eq!(d.to_hex(), "0".repeat(64));
    }

    #[test]
    fn ordering_is_lexicographic_over_words() {
        let a = Sha1Digest::from_words([1, 0, 0, 0, 0]);
        let b = Sha1Digest::from_words([0, u32::MAX, u32::MAX, u32::MAX, u32::MAX]);
        let c = Sha1Digest::from_words([1, 0, 0, 0, 1]);
        assert!(b < a);
        assert!(a < c);
        assert!(b < c);
    }

    #[test]
    fn bytes_are_big_endian() {
        let d = Sha1Digest::from_words([0x0102_0304, 0, 0, 0, 0x0a0b_0c0d]);
        let bytes = d.to_bytes();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[16..], &[0x0a, 0x0b, 0x0c, 0x0d]);
    }
}
