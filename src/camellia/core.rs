//! Camellia core: key schedule and single-block encrypt/decrypt (RFC 3713).
//!
//! Unlike AES's byte-wise state, Camellia operates on two 32-bit halves at
//! a time (`l1, l2, r1, r2`), loaded and stored big-endian per RFC 3713's
//! wire format. The key material (`KL`, `KR`, the derived `KA`, `KB`) is
//! kept in a single 16-word array so the subkey-slot tables in
//! [`super::schedule`] can address any of the four 128-bit banks uniformly.

use crate::byteorder::{load32_be, rol32, ror32, store32_be};
use crate::camellia::constants::{SBOX1, SBOX2, SBOX3, SBOX4, SIGMA};
use crate::camellia::schedule::{materialize_subkeys, KS1, KS2};
use crate::error::{Error, Result};
use crate::registry::BlockCipher;

/// Camellia block size in bytes.
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Camellia-128 key size in bytes.
pub const CAMELLIA_128_KEY_SIZE: usize = 16;
/// Camellia-192 key size in bytes.
pub const CAMELLIA_192_KEY_SIZE: usize = 24;
/// Camellia-256 key size in bytes.
pub const CAMELLIA_256_KEY_SIZE: usize = 32;

/// Number of subkey words generated for an 18-round (128-bit key) schedule.
const KS1_WORDS: usize = 52;
/// Number of subkey words generated for a 24-round (192/256-bit key) schedule.
const KS2_WORDS: usize = 68;

/// A ready-to-use Camellia key schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CamelliaContext {
    /// Number of rounds: 18 for 128-bit keys, 24 for 192/256-bit keys.
    nr: usize,
    /// Key material banks KL, KR, KA, KB, 4 host-order words each.
    k: [u32; 16],
    /// Materialized subkeys. Only the first 52 (nr == 18) or all 68
    /// (nr == 24) entries are meaningful.
    ks: [u32; KS2_WORDS],
}

/// One Feistel round: XOR round keys in, apply the S-layer then the
/// P-layer, fold in the untouched half, and swap.
fn camellia_round(l1: u32, l2: u32, r1: u32, r2: u32, k1: u32, k2: u32) -> (u32, u32, u32, u32) {
    let mut t1 = l1 ^ k1;
    let mut t2 = l2 ^ k2;

    t1 = ((SBOX1[(t1 >> 24) as u8 as usize] as u32) << 24)
        | ((SBOX2[(t1 >> 16) as u8 as usize] as u32) << 16)
        | ((SBOX3[(t1 >> 8) as u8 as usize] as u32) << 8)
        | (SBOX4[t1 as u8 as usize] as u32);
    t2 = ((SBOX2[(t2 >> 24) as u8 as usize] as u32) << 24)
        | ((SBOX3[(t2 >> 16) as u8 as usize] as u32) << 16)
        | ((SBOX4[(t2 >> 8) as u8 as usize] as u32) << 8)
        | (SBOX1[t2 as u8 as usize] as u32);

    t1 ^= rol32(t2, 8);
    t2 ^= rol32(t1, 16);
    t1 ^= ror32(t2, 8);
    t2 ^= ror32(t1, 8);

    t1 ^= r2;
    t2 ^= r1;

    (t2, t1, l1, l2)
}

/// FL: non-Feistel diffusion inserted every 6 rounds.
fn fl(x1: u32, x2: u32, k1: u32, k2: u32) -> (u32, u32) {
    let mut y1 = x1;
    let mut y2 = x2 ^ rol32(x1 & k1, 1);
    y1 ^= y2 | k2;
    (y1, y2)
}

/// FL⁻¹: inverse of [`fl`].
fn inv_fl(y1: u32, y2: u32, k1: u32, k2: u32) -> (u32, u32) {
    let x1 = y1 ^ (y2 | k2);
    let x2 = y2 ^ rol32(x1 & k1, 1);
    (x1, x2)
}

impl CamelliaContext {
    fn expand_key(key: &[u8]) -> Result<(usize, [u32; 16], [u32; KS2_WORDS])> {
        let nr = match key.len() {
            CAMELLIA_128_KEY_SIZE => 18,
            CAMELLIA_192_KEY_SIZE | CAMELLIA_256_KEY_SIZE => 24,
            got => return Err(Error::InvalidKeyLength { got }),
        };

        let mut k = [0u32; 16];

        for i in 0..4 {
            k[i] = load32_be(&key[4 * i..4 * i + 4]);
        }

        if key.len() == CAMELLIA_128_KEY_SIZE {
            // KR stays all-zero.
        } else if key.len() == CAMELLIA_192_KEY_SIZE {
            k[4] = load32_be(&key[16..20]);
            k[5] = load32_be(&key[20..24]);
            k[6] = !k[4];
            k[7] = !k[5];
        } else {
            for i in 0..4 {
                k[4 + i] = load32_be(&key[16 + 4 * i..20 + 4 * i]);
            }
        }

        let (kl0, kl1, kl2, kl3) = (k[0], k[1], k[2], k[3]);
        let (kr0, kr1, kr2, kr3) = (k[4], k[5], k[6], k[7]);

        let mut kb = [kl0 ^ kr0, kl1 ^ kr1, kl2 ^ kr2, kl3 ^ kr3];
        let mut ka = [0u32; 4];

        for i in 0..6 {
            let (nl1, nl2, nr1, nr2) =
                camellia_round(kb[0], kb[1], kb[2], kb[3], SIGMA[2 * i], SIGMA[2 * i + 1]);
            kb = [nl1, nl2, nr1, nr2];

            if i == 1 {
                kb[0] ^= kl0;
                kb[1] ^= kl1;
                kb[2] ^= kl2;
                kb[3] ^= kl3;
            } else if i == 3 {
                ka = kb;
                kb[0] ^= kr0;
                kb[1] ^= kr1;
                kb[2] ^= kr2;
                kb[3] ^= kr3;
            }
        }

        k[8] = ka[0];
        k[9] = ka[1];
        k[10] = ka[2];
        k[11] = ka[3];
        k[12] = kb[0];
        k[13] = kb[1];
        k[14] = kb[2];
        k[15] = kb[3];

        let mut ks = [0u32; KS2_WORDS];
        if nr == 18 {
            materialize_subkeys(&k, &KS1, &mut ks[..KS1_WORDS]);
        } else {
            materialize_subkeys(&k, &KS2, &mut ks);
        }

        Ok((nr, k, ks))
    }
}

impl BlockCipher for CamelliaContext {
    fn init(key: &[u8]) -> Result<Self> {
        let (nr, k, ks) = Self::expand_key(key)?;
        Ok(CamelliaContext { nr, k, ks })
    }

    fn encrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut l1 = load32_be(&input[0..4]);
        let mut l2 = load32_be(&input[4..8]);
        let mut r1 = load32_be(&input[8..12]);
        let mut r2 = load32_be(&input[12..16]);

        l1 ^= self.ks[0];
        l2 ^= self.ks[1];
        r1 ^= self.ks[2];
        r2 ^= self.ks[3];
        let mut idx = 4;

        for i in (1..=self.nr).rev() {
            let (k1, k2) = (self.ks[idx], self.ks[idx + 1]);
            idx += 2;
            let (nl1, nl2, nr1, nr2) = camellia_round(l1, l2, r1, r2, k1, k2);
            l1 = nl1;
            l2 = nl2;
            r1 = nr1;
            r2 = nr2;

            if i == 7 || i == 13 || i == 19 {
                let (k1, k2, k3, k4) =
                    (self.ks[idx], self.ks[idx + 1], self.ks[idx + 2], self.ks[idx + 3]);
                idx += 4;
                let (fl1, fl2) = fl(l1, l2, k1, k2);
                l1 = fl1;
                l2 = fl2;
                let (fr1, fr2) = inv_fl(r1, r2, k3, k4);
                r1 = fr1;
                r2 = fr2;
            }
        }

        r1 ^= self.ks[idx];
        r2 ^= self.ks[idx + 1];
        l1 ^= self.ks[idx + 2];
        l2 ^= self.ks[idx + 3];

        let mut out = [0u8; 16];
        store32_be(r1, &mut out[0..4]);
        store32_be(r2, &mut out[4..8]);
        store32_be(l1, &mut out[8..12]);
        store32_be(l2, &mut out[12..16]);
        out
    }

    fn decrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut r1 = load32_be(&input[0..4]);
        let mut r2 = load32_be(&input[4..8]);
        let mut l1 = load32_be(&input[8..12]);
        let mut l2 = load32_be(&input[12..16]);

        let mut idx = if self.nr == 18 { KS1_WORDS } else { KS2_WORDS };

        r1 ^= self.ks[idx - 4];
        r2 ^= self.ks[idx - 3];
        l1 ^= self.ks[idx - 2];
        l2 ^= self.ks[idx - 1];
        idx -= 4;

        for i in (1..=self.nr).rev() {
            idx -= 2;
            let (k1, k2) = (self.ks[idx], self.ks[idx + 1]);
            let (nr1, nr2, nl1, nl2) = camellia_round(r1, r2, l1, l2, k1, k2);
            r1 = nr1;
            r2 = nr2;
            l1 = nl1;
            l2 = nl2;

            if i == 7 || i == 13 || i == 19 {
                idx -= 4;
                let (k1, k2, k3, k4) =
                    (self.ks[idx], self.ks[idx + 1], self.ks[idx + 2], self.ks[idx + 3]);
                let (fr1, fr2) = fl(r1, r2, k3, k4);
                r1 = fr1;
                r2 = fr2;
                let (fl1, fl2) = inv_fl(l1, l2, k1, k2);
                l1 = fl1;
                l2 = fl2;
            }
        }

        idx -= 4;
        l1 ^= self.ks[idx];
        l2 ^= self.ks[idx + 1];
        r1 ^= self.ks[idx + 2];
        r2 ^= self.ks[idx + 3];

        let mut out = [0u8; 16];
        store32_be(l1, &mut out[0..4]);
        store32_be(l2, &mut out[4..8]);
        store32_be(r1, &mut out[8..12]);
        store32_be(r2, &mut out[12..16]);
        out
    }

    fn clear(&mut self) {
        self.nr = 0;
        self.k = [0u32; 16];
        self.ks = [0u32; KS2_WORDS];
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rejects_bad_key_lengths() {
        for len in [0, 1, 15, 17, 23, 25, 31, 33, 48] {
            let key = vec![0u8; len];
            assert_eq!(
                CamelliaContext::init(&key),
                Err(Error::InvalidKeyLength { got: len })
            );
        }
    }

    #[test]
    fn accepts_all_three_key_sizes() {
        assert!(CamelliaContext::init(&[0u8; 16]).is_ok());
        assert!(CamelliaContext::init(&[0u8; 24]).is_ok());
        assert!(CamelliaContext::init(&[0u8; 32]).is_ok());
    }

    #[test]
    fn nr_matches_key_size() {
        assert_eq!(CamelliaContext::init(&[0u8; 16]).unwrap().nr, 18);
        assert_eq!(CamelliaContext::init(&[0u8; 24]).unwrap().nr, 24);
        assert_eq!(CamelliaContext::init(&[0u8; 32]).unwrap().nr, 24);
    }

    #[test]
    fn clear_zeroes_the_schedule() {
        let mut ctx = CamelliaContext::init(&[0x11u8; 16]).unwrap();
        ctx.clear();
        assert_eq!(ctx.nr, 0);
        assert!(ctx.k.iter().all(|&w| w == 0));
        assert!(ctx.ks.iter().all(|&w| w == 0));
    }
}
