//! Genesis block creation — the fixed first block of every ledger.
//!
//! The genesis block has no predecessor and carries a sentinel payload that
//! is deliberately not a codec-encoded value, so payload readers must treat
//! height 0 as a special case.

use notary_types::Timestamp;

use crate::Block;

/// Sentinel payload stored in the genesis block.
pub const GENESIS_PAYLOAD: &[u8] = b"Genesis Block";

/// Create the genesis block stamped with `timestamp`.
pub fn create_genesis_block(timestamp: Timestamp) -> Block {
    Block::seal(0, timestamp, None, GENESIS_PAYLOAD.to_vec())
}

/// Whether `block` sits at the genesis position.
pub fn is_genesis(block: &Block) -> bool {
    block.height == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_has_no_predecessor() {
        let g = create_genesis_block(Timestamp::new(42));
        assert_eq!(g.height, 0);
        assert!(g.previous_hash.is_none());
        assert_eq!(g.payload, GENESIS_PAYLOAD);
        assert!(g.verify_hash());
        assert!(is_genesis(&g));
    }

    #[test]
    fn genesis_hash_depends_on_time() {
        let a = create_genesis_block(Timestamp::new(1));
        let b = create_genesis_block(Timestamp::new(2));
        assert_ne!(a.hash, b.hash);
    }
}
