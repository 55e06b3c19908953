//! AES (Advanced Encryption Standard), FIPS 197.
//!
//! Supports the three standard key sizes (128/192/256-bit) via
//! [`AesContext`], implementing the [`crate::registry::BlockCipher`]
//! capability set. This module covers only the cipher core — key
//! expansion and single-block encrypt/decrypt — not any mode of operation.

mod constants;
mod core;

pub use self::core::{
    AesContext, AES_128_KEY_SIZE, AES_192_KEY_SIZE, AES_256_KEY_SIZE, AES_BLOCK_SIZE,
};

#[cfg(test)]
mod tests;
