//! Payload codec — turns domain values into a block's opaque bytes and back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{is_genesis, Block, DecodeError, LedgerError};

/// Encoding contract between the ledger and the values stored in it.
pub trait PayloadCodec: Send + Sync {
    /// Encode a raw value into payload bytes. Failure aborts the append.
    fn encode<T: Serialize>(&self, raw: &T) -> Result<Vec<u8>, LedgerError>;

    /// Decode a block's payload. The genesis block never decodes.
    fn decode<T: DeserializeOwned>(&self, block: &Block) -> Result<T, DecodeError>;
}

/// JSON payload codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode<T: Serialize>(&self, raw: &T) -> Result<Vec<u8>, LedgerError> {
        serde_json::to_vec(raw).map_err(|e| LedgerError::Append {
            reason: format!("payload encoding failed: {e}"),
        })
    }

    fn decode<T: DeserializeOwned>(&self, block: &Block) -> Result<T, DecodeError> {
        if is_genesis(block) {
            return Err(DecodeError::Genesis);
        }
        serde_json::from_slice(&block.payload).map_err(|e| DecodeError::Malformed {
            height: block.height,
            reason: e.to_string(),
        })
    }
}
