//! Cross-checks against the RustCrypto implementations.

use cryptal_digest::hash;
use proptest::prelude::*;
use sha1::Sha1;
use sha2::{Digest, Sha256};

fn reference_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn reference_sha1(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

proptest! {
    #[test]
    fn sha256_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        prop_assert_eq!(hash::sha256(&data).to_hex(), reference_sha256(&data));
    }

    #[test]
    fn sha1_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        prop_assert_eq!(hash::sha1(&data).to_hex(), reference_sha1(&data));
    }
}

#[test]
fn every_length_up_to_three_blocks() {
    let data: Vec<u8> = (0..192u32).map(|i| (i * 13) as u8).collect();

    for len in 0..=data.len() {
        let input = &data[..len];
        assert_eq!(hash::sha256(input).to_hex(), reference_sha256(input), "len {len}");
        assert_eq!(hash::sha1(input).to_hex(), reference_sha1(input), "len {len}");
    }
}
