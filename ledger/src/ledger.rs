//! The ledger — owner of the block sequence.
//!
//! All mutation goes through [`Ledger::append`], which holds the write lock
//! from reading the tail to publishing the sealed block. Readers hold the
//! read lock for their whole traversal, so they can never observe a block
//! that is half filled in or interleave with an in-flight append.

use std::sync::Arc;

use notary_types::BlockHash;
use notary_utils::{Clock, SystemClock};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::validation::{validate_chain, ValidationError};
use crate::{create_genesis_block, Block, LedgerError, PayloadCodec};

/// Single-writer, in-memory, append-only ledger.
pub struct Ledger {
    blocks: RwLock<Vec<Block>>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger (height -1). Call [`Ledger::initialize`] to seed genesis.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Restore a ledger from an externally supplied block sequence.
    ///
    /// The sequence is taken as-is; run [`Ledger::validate`] to audit it.
    pub fn from_blocks(blocks: Vec<Block>, clock: Arc<dyn Clock>) -> Self {
        debug!(count = blocks.len(), "restoring ledger from block sequence");
        Self {
            blocks: RwLock::new(blocks),
            clock,
        }
    }

    /// Seed the genesis block if the ledger is empty; otherwise a no-op.
    ///
    /// Returns the genesis block either way.
    pub async fn initialize(&self) -> Result<Block, LedgerError> {
        let mut blocks = self.blocks.write().await;
        if let Some(genesis) = blocks.first() {
            return Ok(genesis.clone());
        }
        let genesis = create_genesis_block(self.clock.now());
        info!(hash = %genesis.hash, "ledger initialized with genesis block");
        blocks.push(genesis.clone());
        Ok(genesis)
    }

    /// Append a payload as a new block and return it.
    ///
    /// Height, link and timestamp are fixed before the hash is computed, and
    /// the block only becomes visible once fully sealed.
    pub async fn append(&self, payload: Vec<u8>) -> Result<Block, LedgerError> {
        let mut blocks = self.blocks.write().await;

        let height = u64::try_from(blocks.len()).map_err(|e| LedgerError::Append {
            reason: format!("height overflow: {e}"),
        })?;
        let previous_hash = blocks.last().map(|b| b.hash);
        let block = Block::seal(height, self.clock.now(), previous_hash, payload);

        blocks.push(block.clone());
        info!(height, hash = %block.hash, "block appended");
        Ok(block)
    }

    /// Encode `raw` with `codec` and append the result.
    pub async fn append_encoded<C, T>(&self, codec: &C, raw: &T) -> Result<Block, LedgerError>
    where
        C: PayloadCodec,
        T: Serialize,
    {
        let payload = codec.encode(raw)?;
        self.append(payload).await
    }

    /// Check every block's content hash and link, in height order.
    ///
    /// Never mutates and never fails: an empty list means the chain is intact.
    pub async fn validate(&self) -> Vec<ValidationError> {
        let blocks = self.blocks.read().await;
        let findings = validate_chain(&blocks);
        if findings.is_empty() {
            debug!(blocks = blocks.len(), "chain validated");
        } else {
            warn!(
                blocks = blocks.len(),
                violations = findings.len(),
                "chain validation found violations"
            );
        }
        findings
    }

    /// First block whose hash matches.
    pub async fn get_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        let blocks = self.blocks.read().await;
        blocks.iter().find(|b| b.hash == *hash).cloned()
    }

    /// Block at `height`, or `None` if out of range.
    pub async fn get_by_height(&self, height: u64) -> Option<Block> {
        let blocks = self.blocks.read().await;
        let index = usize::try_from(height).ok()?;
        blocks.get(index).cloned()
    }

    /// Height of the tail block; -1 before genesis.
    pub async fn get_height(&self) -> i64 {
        self.blocks.read().await.len() as i64 - 1
    }

    /// Number of blocks, genesis included.
    pub async fn len(&self) -> usize {
        self.blocks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blocks.read().await.is_empty()
    }

    /// Clone of the whole block sequence.
    pub async fn blocks(&self) -> Vec<Block> {
        self.blocks.read().await.clone()
    }

    /// Run `f` over the current sequence while holding the read lock.
    pub async fn with_blocks<R>(&self, f: impl FnOnce(&[Block]) -> R) -> R {
        let blocks = self.blocks.read().await;
        f(&blocks)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
