//! AES core: key schedule and single-block encrypt/decrypt.
//!
//! This follows FIPS 197 directly: SubBytes/ShiftRows/MixColumns and their
//! inverses operate on a 16-byte state viewed as a 4x4 column-major matrix
//! (`b[c*4 + r]` is row `r`, column `c`), while the expanded key schedule
//! is kept as an array of host-order 32-bit words (`w`) as the context's
//! data model requires. Byte substitution and row shifting read the state
//! byte-wise; AddRoundKey reads the schedule word-wise and XORs four bytes
//! at a time, converting between the two views with native-endian packing
//! (XOR is endian-agnostic as long as the pack and unpack are paired, the
//! same trick the reference implementation gets via union aliasing).
//!
//! # Example
//!
//! ```
//! use soft_block_ciphers::aes::AesContext;
//! use soft_block_ciphers::registry::BlockCipher;
//!
//! let key = [0u8; 16];
//! let plaintext = [0u8; 16];
//! let ctx = AesContext::init(&key).unwrap();
//! let ciphertext = ctx.encrypt_block(&plaintext);
//! assert_eq!(ctx.decrypt_block(&ciphertext), plaintext);
//! ```

use crate::aes::constants::{xtime, INV_S_BOX, RCON, S_BOX};
use crate::error::{Error, Result};
use crate::registry::BlockCipher;

/// AES block size in bytes, fixed by FIPS 197.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const AES_128_KEY_SIZE: usize = 16;
/// AES-192 key size in bytes.
pub const AES_192_KEY_SIZE: usize = 24;
/// AES-256 key size in bytes.
pub const AES_256_KEY_SIZE: usize = 32;

/// Number of columns in the AES state (always 4).
const NB: usize = 4;
/// Maximum number of 32-bit words in the expanded key schedule, reached by
/// AES-256 (`4 * (14 + 1)`).
const MAX_SCHEDULE_WORDS: usize = 60;

/// A ready-to-use AES key schedule.
///
/// Constructed once per key via [`AesContext::init`] and then reused for any
/// number of `encrypt_block`/`decrypt_block` calls; the context is
/// logically read-only after initialization and may be shared across
/// threads without synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AesContext {
    /// Number of rounds: 10, 12, or 14 depending on key size.
    nr: usize,
    /// Expanded key schedule, host-order 32-bit words. Only the first
    /// `4 * (nr + 1)` entries are meaningful.
    w: [u32; MAX_SCHEDULE_WORDS],
}

fn key_params(key_len: usize) -> Result<(usize, usize)> {
    match key_len / 4 {
        4 => Ok((4, 10)),
        6 => Ok((6, 12)),
        8 => Ok((8, 14)),
        _ => Err(Error::InvalidKeyLength { got: key_len }),
    }
}

/// RotWord: cyclically permute the underlying byte array one position left
/// (`[a0,a1,a2,a3] -> [a1,a2,a3,a0]`). Expressed as a right bit-rotation
/// because `w`'s bytes are packed via native-endian conversion: on the
/// little-endian hosts this crate targets, byte index 0 sits in the low
/// 8 bits, so rotating those bits out to the top reproduces the array
/// rotation exactly (mirrors the reference implementation's `ROR32`).
#[inline]
fn rot_word(w: u32) -> u32 {
    w.rotate_right(8)
}

/// SubWord: apply the forward S-box to each byte of a word.
#[inline]
fn sub_word(w: u32) -> u32 {
    let b = w.to_ne_bytes();
    u32::from_ne_bytes([
        S_BOX[b[0] as usize],
        S_BOX[b[1] as usize],
        S_BOX[b[2] as usize],
        S_BOX[b[3] as usize],
    ])
}

impl AesContext {
    /// Expand `key` (16, 24 or 32 bytes) into a full round-key schedule.
    fn expand_key(key: &[u8]) -> Result<(usize, [u32; MAX_SCHEDULE_WORDS])> {
        let (nk, nr) = key_params(key.len())?;
        let mut w = [0u32; MAX_SCHEDULE_WORDS];

        for i in 0..nk {
            w[i] = u32::from_ne_bytes([
                key[4 * i],
                key[4 * i + 1],
                key[4 * i + 2],
                key[4 * i + 3],
            ]);
        }

        let schedule_len = NB * (nr + 1);
        for i in nk..schedule_len {
            let mut t = w[i - 1];
            if i % nk == 0 {
                t = sub_word(rot_word(t)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                t = sub_word(t);
            }
            w[i] = w[i - nk] ^ t;
        }

        Ok((nr, w))
    }

    fn round_key(&self, round: usize) -> &[u32] {
        &self.w[round * NB..round * NB + NB]
    }
}

/// Add a round key to the state via byte-wise XOR with the word schedule.
fn add_round_key(state: &mut [u8; 16], round_key: &[u32]) {
    for (i, word) in round_key.iter().enumerate() {
        let kb = word.to_ne_bytes();
        for j in 0..4 {
            state[4 * i + j] ^= kb[j];
        }
    }
}

fn sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = S_BOX[*b as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = INV_S_BOX[*b as usize];
    }
}

/// Row `r` of the column-major state is cyclic-left-shifted by `r` bytes.
fn shift_rows(state: &mut [u8; 16]) {
    let t = state[1];
    state[1] = state[5];
    state[5] = state[9];
    state[9] = state[13];
    state[13] = t;

    state.swap(2, 10);
    state.swap(6, 14);

    let t = state[3];
    state[3] = state[15];
    state[15] = state[11];
    state[11] = state[7];
    state[7] = t;
}

/// Row `r` of the column-major state is cyclic-right-shifted by `r` bytes.
fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = state[1];
    state[1] = state[13];
    state[13] = state[9];
    state[9] = state[5];
    state[5] = t;

    state.swap(2, 10);
    state.swap(6, 14);

    let t = state[3];
    state[3] = state[7];
    state[7] = state[11];
    state[11] = state[15];
    state[15] = t;
}

fn mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let (b0, b1, b2, b3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        let p = b0 ^ b1 ^ b2 ^ b3;
        state[i] ^= p ^ xtime(b0 ^ b1);
        state[i + 1] ^= p ^ xtime(b1 ^ b2);
        state[i + 2] ^= p ^ xtime(b2 ^ b3);
        state[i + 3] ^= p ^ xtime(b3 ^ b0);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let (b0, b1, b2, b3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        let p = b0 ^ b1 ^ b2 ^ b3;
        let q = p ^ xtime(xtime(xtime(p)));
        let pe = q ^ xtime(xtime(b0 ^ b2));
        let po = q ^ xtime(xtime(b1 ^ b3));
        state[i] = pe ^ b0 ^ xtime(b0 ^ b1);
        state[i + 1] = po ^ b1 ^ xtime(b1 ^ b2);
        state[i + 2] = pe ^ b2 ^ xtime(b2 ^ b3);
        state[i + 3] = po ^ b3 ^ xtime(b3 ^ b0);
    }
}

impl BlockCipher for AesContext {
    fn init(key: &[u8]) -> Result<Self> {
        let (nr, w) = Self::expand_key(key)?;
        Ok(AesContext { nr, w })
    }

    fn encrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut state = *input;

        add_round_key(&mut state, self.round_key(0));

        for round in 1..self.nr {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.round_key(round));
        }

        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.round_key(self.nr));

        state
    }

    fn decrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut state = *input;

        add_round_key(&mut state, self.round_key(self.nr));

        for round in (1..self.nr).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.round_key(round));
            inv_mix_columns(&mut state);
        }

        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.round_key(0));

        state
    }

    fn clear(&mut self) {
        self.nr = 0;
        self.w = [0u32; MAX_SCHEDULE_WORDS];
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
                AesContext::init(&key),
                Err(Error::InvalidKeyLength { got: len })
            );
        }
    }

    #[test]
    fn accepts_all_three_key_sizes() {
        assert!(AesContext::init(&[0u8; 16]).is_ok());
        assert!(AesContext::init(&[0u8; 24]).is_ok());
        assert!(AesContext::init(&[0u8; 32]).is_ok());
    }

    #[test]
    fn repeated_init_is_deterministic() {
        let key = [0x42u8; 24];
        let a = AesContext::init(&key).unwrap();
        let b = AesContext::init(&key).unwrap();
        assert_eq!(a.nr, b.nr);
        assert_eq!(a.w, b.w);
    }

    #[test]
    fn first_words_of_schedule_equal_key_bytes() {
        let key: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ];
        let ctx = AesContext::init(&key).unwrap();
        for i in 0..4 {
            let expect =
                u32::from_ne_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
            assert_eq!(ctx.w[i], expect);
        }
    }

    #[test]
    fn clear_zeroes_the_schedule() {
        let mut ctx = AesContext::init(&[0x11u8; 16]).unwrap();
        ctx.clear();
        assert_eq!(ctx.nr, 0);
        assert!(ctx.w.iter().all(|&w| w == 0));
    }

    #[test]
    fn aliased_input_output_is_handled_by_value_semantics() {
        let ctx = AesContext::init(&[0x5Au8; 16]).unwrap();
        let block = [0x01u8; 16];
        let mut buf = block;
        let ct = ctx.encrypt_block(&buf);
        buf = ct;
        let pt = ctx.decrypt_block(&buf);
        assert_eq!(pt, block);
    }
}
