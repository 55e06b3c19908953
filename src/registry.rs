//! Cipher registry: a uniform descriptor for dispatching over block
//! ciphers without the caller knowing the concrete algorithm.
//!
//! This mirrors the `CipherAlgo` struct of function pointers used
//! throughout the original C source (one `const CipherAlgo` per
//! algorithm, consulted by the higher-level mode-of-operation code). In
//! Rust the same contract is expressed as a trait, [`BlockCipher`], plus a
//! small descriptor record, [`CipherAlgo`], so that generic code can look
//! up `AES_CIPHER_ALGO` / `CAMELLIA_CIPHER_ALGO` and allocate/dispatch
//! polymorphically over `{init, encrypt_block, decrypt_block}`.

use crate::aes::AesContext;
use crate::camellia::CamelliaContext;
use crate::error::Result;

/// The kind of cryptographic primitive a [`CipherAlgo`] describes.
///
/// Only `Block` is used by this crate; `Stream` exists so the descriptor
/// shape matches what a stream cipher implemented elsewhere would use,
/// the same way the C `CipherAlgoType` enum has a block and a stream
/// variant even though `aesCipherAlgo`/`camelliaCipherAlgo` only ever use
/// the block one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgoType {
    Block,
    Stream,
}

/// The common capability set every block cipher in this crate exposes.
///
/// `init` consumes a key and produces a ready-to-use context; each
/// subsequent `encrypt_block`/`decrypt_block` call is independent,
/// deterministic, and read-only with respect to the context.
pub trait BlockCipher: Sized {
    /// Size of one block, in bytes. Fixed at 16 for every algorithm this
    /// crate implements.
    const BLOCK_SIZE: usize = 16;

    /// Initialize a context from a key. Fails with
    /// [`crate::error::Error::InvalidKeyLength`] if `key.len()` is not one
    /// of the algorithm's accepted sizes.
    fn init(key: &[u8]) -> Result<Self>;

    /// Encrypt one 16-byte block.
    fn encrypt_block(&self, input: &[u8; 16]) -> [u8; 16];

    /// Decrypt one 16-byte block; the inverse of `encrypt_block` under the
    /// same context.
    fn decrypt_block(&self, input: &[u8; 16]) -> [u8; 16];

    /// Overwrite the key schedule held by this context with zeroes.
    fn clear(&mut self);
}

/// An immutable, process-lifetime descriptor for one block-cipher
/// algorithm, analogous to the original C `CipherAlgo` struct.
pub struct CipherAlgo {
    /// Printable algorithm name, e.g. `"AES"` or `"CAMELLIA"`.
    pub name: &'static str,
    /// Size, in bytes, of the context this algorithm's `init` produces.
    pub context_size: usize,
    /// Always [`CipherAlgoType::Block`] for the algorithms in this crate.
    pub algo_type: CipherAlgoType,
    /// Block size in bytes. Fixed at 16.
    pub block_size: usize,
}

/// Descriptor for the AES block cipher.
pub const AES_CIPHER_ALGO: CipherAlgo = CipherAlgo {
    name: "AES",
    context_size: std::mem::size_of::<AesContext>(),
    algo_type: CipherAlgoType::Block,
    block_size: 16,
};

/// Descriptor for the Camellia block cipher.
pub const CAMELLIA_CIPHER_ALGO: CipherAlgo = CipherAlgo {
    name: "CAMELLIA",
    context_size: std::mem::size_of::<CamelliaContext>(),
    algo_type: CipherAlgoType::Block,
    block_size: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_report_block_cipher() {
        assert_eq!(AES_CIPHER_ALGO.name, "AES");
        assert_eq!(AES_CIPHER_ALGO.block_size, 16);
        assert_eq!(AES_CIPHER_ALGO.algo_type, CipherAlgoType::Block);

        assert_eq!(CAMELLIA_CIPHER_ALGO.name, "CAMELLIA");
        assert_eq!(CAMELLIA_CIPHER_ALGO.block_size, 16);
        assert_eq!(CAMELLIA_CIPHER_ALGO.algo_type, CipherAlgoType::Block);
    }

    #[test]
    fn generic_dispatch_over_block_cipher() {
        fn round_trip<C: BlockCipher>(key: &[u8], block: [u8; 16]) -> [u8; 16] {
            let ctx = C::init(key).expect("init failed");
            let ct = ctx.encrypt_block(&block);
            ctx.decrypt_block(&ct)
        }

        let key = [0u8; 16];
        let block = [0x11u8; 16];
        assert_eq!(round_trip::<AesContext>(&key, block), block);
        assert_eq!(round_trip::<CamelliaContext>(&key, block), block);
    }
}
