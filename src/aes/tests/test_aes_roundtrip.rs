//! Round-trip and permutation properties that must hold for every accepted
//! AES key size.

use crate::aes::AesContext;
use crate::registry::BlockCipher;
use crate::test_support::Xorshift64;
use std::collections::HashSet;

#[test]
fn round_trip_over_randomized_key_block_pairs() {
    let mut rng = Xorshift64::seeded(0xA5A5_1234_9876_FEED);

    for key_len in [16usize, 24, 32] {
        for _ in 0..2000 {
            let mut key = vec![0u8; key_len];
            rng.fill_bytes(&mut key);
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);

            let ctx = AesContext::init(&key).unwrap();
            let ciphertext = ctx.encrypt_block(&block);
            assert_eq!(ctx.decrypt_block(&ciphertext), block);

            let mut block2 = [0u8; 16];
            rng.fill_bytes(&mut block2);
            let plaintext = ctx.decrypt_block(&block2);
            assert_eq!(ctx.encrypt_block(&plaintext), block2);
        }
    }
}

#[test]
fn encrypt_is_a_permutation_on_a_sample_of_blocks() {
    let ctx = AesContext::init(&[0x7Fu8; 16]).unwrap();
    let mut rng = Xorshift64::seeded(0xC0FF_EE00_DEAD_BEEF);
    let mut seen = HashSet::new();

    for _ in 0..5000 {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let ct = ctx.encrypt_block(&block);
        assert!(seen.insert(ct), "encrypt_block produced a collision");
    }
}
