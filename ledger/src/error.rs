use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Internal failure while building a block; nothing was published.
    #[error("append failed: {reason}")]
    Append { reason: String },

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Why a block's payload could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The genesis block carries a sentinel, not a codec-encoded payload.
    #[error("genesis block has no decodable payload")]
    Genesis,

    #[error("malformed payload at height {height}: {reason}")]
    Malformed { height: u64, reason: String },
}
