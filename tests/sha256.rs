use std::io::Write;

use cryptal_digest::hash::sha256;
use cryptal_digest::{BufferSource, Error, FileSource, Sha256Digest};

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256::compute_from_bytes(input).unwrap();

    assert_eq!(
        got.to_hex(),
        expected,
        "Digest mismatch for input of {} bytes",
        input.len(),
    );
}

// -------------------------------------------------------
// 1. OFFICIAL FIPS 180-4 VECTORS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_448_bit_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_896_bit_vector() {
    expect_sha256_eq(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    );
}

#[test]
fn sha256_million_a() {
    let buf = vec![b'a'; 1_000_000];
    expect_sha256_eq(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. ENTRY POINTS AGREE
// -------------------------------------------------------

#[test]
fn sha256_buffer_with_bit_length() {
    let data = b"abcdef";
    let prefix = sha256::compute_from_buffer(data, 24).unwrap();
    assert_eq!(prefix, sha256::sha256(b"abc"));

    let empty = sha256::compute_from_buffer(data, 0).unwrap();
    assert_eq!(empty, sha256::sha256(b""));
}

#[test]
fn sha256_buffer_rejects_unaligned_bits() {
    assert!(matches!(
        sha256::compute_from_buffer(b"abc", 20),
        Err(Error::UnalignedLength { bits: 20 })
    ));
}

#[test]
fn sha256_source_through_trait_object() {
    let mut source = BufferSource::new(b"abc").unwrap();
    let dynamic: &mut dyn cryptal_digest::MessageSource = &mut source;

    let digest: Sha256Digest = sha256::compute_from_source(dynamic).unwrap();
    assert_eq!(digest, sha256::sha256(b"abc"));
}

#[test]
fn sha256_file_matches_buffer() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&data).unwrap();

    assert_eq!(
        sha256::compute_from_file(tmp.path()).unwrap(),
        sha256::compute_from_bytes(&data).unwrap()
    );
}

#[test]
fn sha256_empty_file_is_not_an_open_failure() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    let digest = sha256::compute_from_file(tmp.path()).unwrap();
    assert_eq!(
        digest.to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        sha256::compute_from_file(dir.path().join("missing")),
        Err(Error::Open { .. })
    ));
}

#[test]
fn sha256_rehash_handle_after_seek() {
    use std::io::{Seek, SeekFrom};

    let data = [0x3cu8; 200];
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&data).unwrap();

    // clones share the file offset, which the first pass leaves at the end
    let mut file = tmp.reopen().unwrap();
    let handle = file.try_clone().unwrap();
    let first = sha256::compute_from_source(&mut FileSource::from_file(handle).unwrap()).unwrap();

    let at_end = sha256::compute_from_source(&mut FileSource::from_file(file.try_clone().unwrap()).unwrap()).unwrap();
    assert_eq!(at_end, sha256::sha256(b""));

    file.seek(SeekFrom::Start(0)).unwrap();
    let second = sha256::compute_from_source(&mut FileSource::from_file(file).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, sha256::sha256(&data));
}
