//! Top-level error type shared across crates.

use thiserror::Error;

/// Parse and encoding failures for the fundamental types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotaryError {
    #[error("invalid block hash: {0}")]
    InvalidHash(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),
}
