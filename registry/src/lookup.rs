//! Read-only projections of star claims out of the ledger.

use std::sync::Arc;

use notary_ledger::{Block, JsonCodec, Ledger, PayloadCodec};
use notary_types::{BlockHash, WalletAddress};

use crate::{Star, StarClaim};

/// Decodes star claims from ledger blocks.
///
/// Blocks that do not decode as a claim (genesis, raw appends) are skipped.
#[derive(Clone)]
pub struct StarLookup {
    ledger: Arc<Ledger>,
    codec: JsonCodec,
}

impl StarLookup {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self {
            ledger,
            codec: JsonCodec,
        }
    }

    /// Stars owned by `address`, in append order.
    pub async fn list_stars_for_owner(&self, address: &WalletAddress) -> Vec<Star> {
        self.claims_for_owner(address)
            .await
            .into_iter()
            .map(|(_, claim)| claim.star)
            .collect()
    }

    /// Blocks and decoded claims owned by `address`, in append order.
    pub async fn claims_for_owner(&self, address: &WalletAddress) -> Vec<(Block, StarClaim)> {
        self.ledger
            .with_blocks(|blocks| {
                blocks
                    .iter()
                    .filter_map(|block| {
                        let claim: StarClaim = self.codec.decode(block).ok()?;
                        (claim.owner == *address).then(|| (block.clone(), claim))
                    })
                    .collect()
            })
            .await
    }

    /// Claim stored in the block with `hash`, if that block holds one.
    pub async fn star_by_block_hash(&self, hash: &BlockHash) -> Option<StarClaim> {
        let block = self.ledger.get_by_hash(hash).await?;
        self.codec.decode(&block).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notary_nullables::NullClock;

    async fn seeded() -> (Arc<Ledger>, StarLookup) {
        let ledger = Arc::new(Ledger::new(Arc::new(NullClock::new(5))));
        ledger.initialize().await.unwrap();
        for (owner, dec) in [("alice", "1"), ("bob", "2"), ("alice", "3")] {
            let claim = StarClaim {
                star: Star::new(dec),
                owner: WalletAddress::new(owner),
            };
            ledger.append_encoded(&JsonCodec, &claim).await.unwrap();
        }
        ledger.append(b"not a claim".to_vec()).await.unwrap();
        let lookup = StarLookup::new(ledger.clone());
        (ledger, lookup)
    }

    #[tokio::test]
    async fn lists_owner_stars_in_order() {
        let (_, lookup) = seeded().await;
        let decs: Vec<String> = lookup
            .list_stars_for_owner(&WalletAddress::new("alice"))
            .await
            .into_iter()
            .map(|s| s.dec)
            .collect();
        assert_eq!(decs, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn unknown_owner_gets_nothing() {
        let (_, lookup) = seeded().await;
        assert!(lookup
            .list_stars_for_owner(&WalletAddress::new("carol"))
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn claims_carry_their_blocks() {
        let (_, lookup) = seeded().await;
        let claims = lookup.claims_for_owner(&WalletAddress::new("bob")).await;
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].0.height, 2);
    }

    #[tokio::test]
    async fn star_by_hash_skips_non_claims() {
        let (ledger, lookup) = seeded().await;
        let genesis = ledger.get_by_height(0).await.unwrap();
        let raw = ledger.get_by_height(4).await.unwrap();
        let first = ledger.get_by_height(1).await.unwrap();

        assert!(lookup.star_by_block_hash(&genesis.hash).await.is_none());
        assert!(lookup.star_by_block_hash(&raw.hash).await.is_none());
        assert_eq!(
            lookup.star_by_block_hash(&first.hash).await.unwrap().star.dec,
            "1"
        );
        assert!(lookup.star_by_block_hash(&BlockHash::ZERO).await.is_none());
    }
}
