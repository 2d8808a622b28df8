//! The registry handle — the full operation surface offered to a hosting layer.

use std::sync::Arc;

use notary_ledger::{Block, Ledger, LedgerError, ValidationError};
use notary_types::{BlockHash, WalletAddress};
use notary_utils::{Clock, SystemClock};
use tracing::info;

use crate::{
    ChallengeService, OwnershipChallenge, RegistryConfig, RegistryError, Star, StarClaim,
    StarLookup, SubmissionWorkflow,
};

/// One ledger plus the services that read and write it.
///
/// Cheap to clone; all clones share the same ledger. The host creates one at
/// startup and keeps it for the life of the process.
#[derive(Clone)]
pub struct StarRegistry {
    ledger: Arc<Ledger>,
    challenges: ChallengeService,
    workflow: SubmissionWorkflow,
    lookup: StarLookup,
}

impl StarRegistry {
    /// Build a registry over a fresh, empty ledger.
    pub fn new(config: RegistryConfig, clock: Arc<dyn Clock>) -> Self {
        let ledger = Arc::new(Ledger::new(clock.clone()));
        Self::with_ledger(config, ledger, clock)
    }

    /// Build a registry over an existing ledger.
    pub fn with_ledger(config: RegistryConfig, ledger: Arc<Ledger>, clock: Arc<dyn Clock>) -> Self {
        Self {
            challenges: ChallengeService::new(clock.clone()),
            workflow: SubmissionWorkflow::new(ledger.clone(), clock, config),
            lookup: StarLookup::new(ledger.clone()),
            ledger,
        }
    }

    /// Create a wall-clock registry and seed its genesis block.
    pub async fn start(config: RegistryConfig) -> Result<Self, RegistryError> {
        let registry = Self::new(config, Arc::new(SystemClock));
        let genesis = registry.initialize().await?;
        info!(genesis = %genesis.hash, "star registry started");
        Ok(registry)
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    pub async fn initialize(&self) -> Result<Block, LedgerError> {
        self.ledger.initialize().await
    }

    /// Append a raw payload, bypassing ownership verification.
    pub async fn append(&self, payload: Vec<u8>) -> Result<Block, LedgerError> {
        self.ledger.append(payload).await
    }

    pub async fn validate(&self) -> Vec<ValidationError> {
        self.ledger.validate().await
    }

    pub async fn get_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        self.ledger.get_by_hash(hash).await
    }

    pub async fn get_by_height(&self, height: u64) -> Option<Block> {
        self.ledger.get_by_height(height).await
    }

    pub async fn get_height(&self) -> i64 {
        self.ledger.get_height().await
    }

    pub async fn issue_challenge(&self, address: &WalletAddress) -> OwnershipChallenge {
        self.challenges.issue(address)
    }

    pub async fn submit(
        &self,
        address: &WalletAddress,
        challenge: &str,
        signature: &str,
        star: Star,
    ) -> Result<Block, RegistryError> {
        self.workflow.submit(address, challenge, signature, star).await
    }

    pub async fn list_stars_for_owner(&self, address: &WalletAddress) -> Vec<Star> {
        self.lookup.list_stars_for_owner(address).await
    }

    pub async fn claims_for_owner(&self, address: &WalletAddress) -> Vec<(Block, StarClaim)> {
        self.lookup.claims_for_owner(address).await
    }

    pub async fn star_by_block_hash(&self, hash: &BlockHash) -> Option<StarClaim> {
        self.lookup.star_by_block_hash(hash).await
    }
}
