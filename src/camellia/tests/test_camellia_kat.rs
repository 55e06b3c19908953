//! Known-answer tests for Camellia, sourced from RFC 3713's test vectors.

use crate::camellia::CamelliaContext;
use crate::registry::BlockCipher;
use hex::decode as hex_decode;

fn block_from_hex(s: &str) -> [u8; 16] {
    let bytes = hex_decode(s).expect("invalid hex in test vector");
    bytes.try_into().expect("test vector is not 16 bytes")
}

fn check_kat(key_hex: &str, plaintext_hex: &str, ciphertext_hex: &str) {
    let key = hex_decode(key_hex).expect("invalid hex key");
    let plaintext = block_from_hex(plaintext_hex);
    let ciphertext = block_from_hex(ciphertext_hex);

    let ctx = CamelliaContext::init(&key).expect("key length should be valid");

    assert_eq!(ctx.encrypt_block(&plaintext), ciphertext);
    assert_eq!(ctx.decrypt_block(&ciphertext), plaintext);
}

#[test]
fn rfc3713_camellia128() {
    check_kat(
        "0123456789ABCDEFFEDCBA9876543210",
        "0123456789ABCDEFFEDCBA9876543210",
        "67673138549669730857065648EABE43",
    );
}

#[test]
fn rfc3713_camellia192() {
    check_kat(
        "0123456789ABCDEFFEDCBA98765432100011223344556677",
        "0123456789ABCDEFFEDCBA9876543210",
        "B4993401B3E996F84EE5CEE7D79B09B9",
    );
}

#[test]
fn rfc3713_camellia256() {
    check_kat(
        "0123456789ABCDEFFEDCBA987654321000112233445566778899AABBCCDDEEFF",
        "0123456789ABCDEFFEDCBA9876543210",
        "9ACC237DFF16D76C20EF7C919E3A7509",
    );
}

#[test]
fn invalid_key_lengths_are_rejected() {
    for len in [0, 1, 15, 17, 23, 25, 31, 33, 48] {
        let key = vec![0u8; len];
        assert!(CamelliaContext::init(&key).is_err());
    }
}
