//! Block — one immutable entry in the ledger.

use notary_crypto::sha256_multi;
use notary_types::{BlockHash, Timestamp};
use serde::{Deserialize, Serialize};

/// A block in the hash-chained ledger.
///
/// Blocks are sealed by the ledger at append time and never change after
/// publication; readers always receive clones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the ledger (genesis is 0).
    pub height: u64,

    /// Append time in epoch seconds.
    pub timestamp: Timestamp,

    /// Hash of the preceding block; `None` only for genesis.
    pub previous_hash: Option<BlockHash>,

    /// SHA-256 over the canonical encoding of the other four fields.
    pub hash: BlockHash,

    /// Opaque codec-encoded payload (hex in serialized form).
    #[serde(with = "hex_payload")]
    pub payload: Vec<u8>,
}

impl Block {
    /// Build a block and compute its hash over the already-fixed fields.
    pub fn seal(
        height: u64,
        timestamp: Timestamp,
        previous_hash: Option<BlockHash>,
        payload: Vec<u8>,
    ) -> Self {
        let hash = Self::content_hash(height, timestamp, previous_hash.as_ref(), &payload);
        Self {
            height,
            timestamp,
            previous_hash,
            hash,
            payload,
        }
    }

    /// Hash the canonical field encoding.
    ///
    /// Field order is fixed: height (u64 BE), timestamp (u64 BE), a presence
    /// byte plus the 32 previous-hash bytes, payload length (u64 BE), payload.
    /// The length prefix keeps the encoding unambiguous.
    pub fn content_hash(
        height: u64,
        timestamp: Timestamp,
        previous_hash: Option<&BlockHash>,
        payload: &[u8],
    ) -> BlockHash {
        let height_bytes = height.to_be_bytes();
        let ts_bytes = timestamp.as_secs().to_be_bytes();
        let len_bytes = (payload.len() as u64).to_be_bytes();
        let digest = match previous_hash {
            Some(prev) => sha256_multi(&[
                &height_bytes,
                &ts_bytes,
                &[1u8],
                prev.as_bytes(),
                &len_bytes,
                payload,
            ]),
            None => sha256_multi(&[&height_bytes, &ts_bytes, &[0u8], &len_bytes, payload]),
        };
        BlockHash::new(digest)
    }

    /// Recompute the hash from the stored fields.
    pub fn compute_hash(&self) -> BlockHash {
        Self::content_hash(
            self.height,
            self.timestamp,
            self.previous_hash.as_ref(),
            &self.payload,
        )
    }

    /// Whether the stored hash matches the stored content.
    pub fn verify_hash(&self) -> bool {
        self.compute_hash() == self.hash
    }
}

mod hex_payload {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
