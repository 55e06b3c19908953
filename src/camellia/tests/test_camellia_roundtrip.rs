//! Round-trip and permutation properties that must hold for every accepted
//! Camellia key size.

use crate::camellia::CamelliaContext;
use crate::registry::BlockCipher;
use crate::test_support::Xorshift64;
use std::collections::HashSet;

#[test]
fn round_trip_over_randomized_key_block_pairs() {
    let mut rng = Xorshift64::seeded(0x1357_9BDF_2468_ACE0);

    for key_len in [16usize, 24, 32] {
        for _ in 0..2000 {
            let mut key = vec![0u8; key_len];
            rng.fill_bytes(&mut key);
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);

            let ctx = CamelliaContext::init(&key).unwrap();
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
    let ctx = CamelliaContext::init(&[0x7Fu8; 16]).unwrap();
    let mut rng = Xorshift64::seeded(0xFEED_FACE_C0DE_BABE);
    let mut seen = HashSet::new();

    for _ in 0..5000 {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let ct = ctx.encrypt_block(&block);
        assert!(seen.insert(ct), "encrypt_block produced a collision");
    }
}

#[test]
fn key_schedules_differ_across_key_sizes() {
    let key16 = [0x3Cu8; 16];
    let mut key24 = [0x3Cu8; 24];
    key24[16..].fill(0);
    let mut key32 = [0x3Cu8; 32];
    key32[16..].fill(0);

    let ctx16 = CamelliaContext::init(&key16).unwrap();
    let ctx24 = CamelliaContext::init(&key24).unwrap();
    let ctx32 = CamelliaContext::init(&key32).unwrap();

    let block = [0x11u8; 16];
    let c16 = ctx16.encrypt_block(&block);
    let c24 = ctx24.encrypt_block(&block);
    let c32 = ctx32.encrypt_block(&block);

    assert_ne!(c16, c24);
    assert_ne!(c24, c32);
}
