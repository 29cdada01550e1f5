//! Conversions between host integers and the big-endian wire form
//!
//! FIPS 180-4 reads message words and writes the message length in
//! big-endian order. These helpers make the conversion explicit at every
//! place a value crosses between host representation and wire bytes,
//! so that no call site depends on the host byte order.

/// Converts a host `u32` into its big-endian wire representation.
///
/// On big-endian hosts this is the identity.
#[inline(always)]
pub const fn to_wire32(value: u32) -> u32 {
    value.to_be()
}

/// Converts a big-endian wire `u32` back into host order.
#[inline(always)]
pub const fn from_wire32(value: u32) -> u32 {
    u32::from_be(value)
}

/// Converts a host `u64` into its big-endian wire representation.
#[inline(always)]
pub const fn to_wire64(value: u64) -> u64 {
    value.to_be()
}

/// Converts a big-endian wire `u64` back into host order.
#[inline(always)]
pub const fn from_wire64(value: u64) -> u64 {
    u64::from_be(value)
}

/// Interprets 64 wire bytes as sixteen big-endian words.
pub fn load_words(bytes: &[u8; 64]) -> [u32; 16] {
    let mut words = [0u32; 16];
    load_into(bytes, &mut words);
    words
}

/// Reads big-endian words from `bytes` into `words`.
///
/// # Panics
/// Panics if `bytes` does not hold exactly `4 * words.len()` bytes.
pub fn load_into(bytes: &[u8], words: &mut [u32]) {
    assert_eq!(bytes.len(), words.len() * 4, "input must fill every word");

    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Serializes words into their big-endian byte sequence.
pub fn store_words(words: &[u32], out: &mut [u8]) {
    assert_eq!(out.len(), words.len() * 4, "output must hold every word");

    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Encodes a bit length as the 8-byte big-endian trailer of a padded message.
#[inline(always)]
pub const fn length_field(bits: u64) -> [u8; 8] {
    bits.to_be_bytes()
}
