//! Library-wide error and result types.

use std::fmt;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The single failure mode a block-cipher context can report.
///
/// Every other operation is infallible given a ready context and a
/// correctly sized block: see the module docs on [`crate::aes`] and
/// [`crate::camellia`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key passed to `init` is not one of the sizes the algorithm
    /// supports (16, 24 or 32 bytes for both AES and Camellia).
    InvalidKeyLength {
        /// The length, in bytes, that was rejected.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { got } => {
                write!(f, "invalid key length: expected 16, 24, or 32 bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for Error {}
