//! Known-answer tests for AES, sourced from FIPS 197 Appendix C and the
//! well-known all-zero-key/all-zero-plaintext AES-128 vector.

use crate::aes::AesContext;
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

    let ctx = AesContext::init(&key).expect("key length should be valid");

    assert_eq!(ctx.encrypt_block(&plaintext), ciphertext);
    assert_eq!(ctx.decrypt_block(&ciphertext), plaintext);
}

#[test]
fn fips197_c1_aes128() {
    check_kat(
        "000102030405060708090A0B0C0D0E0F",
        "00112233445566778899AABBCCDDEEFF",
        "69C4E0D86A7B0430D8CDB78070B4C55A",
    );
}

#[test]
fn fips197_c2_aes192() {
    check_kat(
        "000102030405060708090A0B0C0D0E0F1011121314151617",
        "00112233445566778899AABBCCDDEEFF",
        "DDA97CA4864CDFE06EAF70A0EC0D7191",
    );
}

#[test]
fn fips197_c3_aes256() {
    check_kat(
        "000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F",
        "00112233445566778899AABBCCDDEEFF",
        "8EA2B7CA516745BFEAFC49904B496089",
    );
}

#[test]
fn all_zero_key_and_plaintext_aes128() {
    check_kat(
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66E94BD4EF8A2C3B884CFA59CA342B2E",
    );
}

#[test]
fn invalid_key_lengths_are_rejected() {
    for len in [0, 1, 15, 17, 23, 25, 31, 33, 48] {
        let key = vec![0u8; len];
        assert!(AesContext::init(&key).is_err());
    }
}
