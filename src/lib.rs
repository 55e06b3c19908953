//! Software implementations of the AES and Camellia block ciphers.
//!
//! # Features
//!
//! - AES-128/192/256 (FIPS 197): key expansion and single-block
//!   encrypt/decrypt.
//! - Camellia-128/192/256 (RFC 3713): key schedule and single-block
//!   encrypt/decrypt, including the 192-bit-key complement trick that
//!   folds a 192-bit key into the 256-bit key schedule.
//! - A small [`registry`] module describing both ciphers uniformly
//!   through a shared [`registry::BlockCipher`] trait and a
//!   [`registry::CipherAlgo`] descriptor, for callers that want to select
//!   an algorithm at runtime.
//!
//! # Usage
//!
//! ```
//! use soft_block_ciphers::aes::AesContext;
//! use soft_block_ciphers::camellia::CamelliaContext;
//! use soft_block_ciphers::registry::BlockCipher;
//!
//! let aes = AesContext::init(&[0u8; 16]).unwrap();
//! let ciphertext = aes.encrypt_block(&[0u8; 16]);
//! assert_eq!(aes.decrypt_block(&ciphertext), [0u8; 16]);
//!
//! let camellia = CamelliaContext::init(&[0u8; 16]).unwrap();
//! let ciphertext = camellia.encrypt_block(&[0u8; 16]);
//! assert_eq!(camellia.decrypt_block(&ciphertext), [0u8; 16]);
//! ```
//!
//! # Notes
//!
//! This crate implements only the two block-cipher primitives and their
//! key schedules; it does not provide chaining modes, padding, or
//! authenticated encryption. Callers who need ECB/CBC/GCM/etc. should
//! layer one of those on top of a [`registry::BlockCipher`] implementation.
//!
//! # Disclaimer
//!
//! This is a software implementation only. It has not been audited and
//! makes no attempt at constant-time execution or key zeroization beyond
//! the explicit `clear()` method on each context.

pub mod aes;
pub mod byteorder;
pub mod camellia;
pub mod error;
pub mod registry;

#[cfg(test)]
mod test_support;
