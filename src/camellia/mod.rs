//! Camellia block cipher (RFC 3713): 128-bit blocks, 128/192/256-bit keys.

mod constants;
mod core;
mod schedule;

pub use self::core::{
    CamelliaContext, CAMELLIA_128_KEY_SIZE, CAMELLIA_192_KEY_SIZE, CAMELLIA_256_KEY_SIZE,
    CAMELLIA_BLOCK_SIZE,
};

#[cfg(test)]
mod tests;
