//! Verified star submission.

use std::sync::Arc;

use notary_crypto::verify_message;
use notary_ledger::{Block, JsonCodec, Ledger};
use notary_types::{MessageSignature, WalletAddress};
use notary_utils::{format_duration, Clock};
use tracing::{info, warn};

use crate::{OwnershipChallenge, RegistryConfig, RegistryError, Star, StarClaim};

/// Checks an ownership proof and appends the star on the owner's behalf.
#[derive(Clone)]
pub struct SubmissionWorkflow {
    ledger: Arc<Ledger>,
    clock: Arc<dyn Clock>,
    codec: JsonCodec,
    config: RegistryConfig,
}

impl SubmissionWorkflow {
    pub fn new(ledger: Arc<Ledger>, clock: Arc<dyn Clock>, config: RegistryConfig) -> Self {
        Self {
            ledger,
            clock,
            codec: JsonCodec,
            config,
        }
    }

    /// Submit a star claim backed by a signed ownership challenge.
    ///
    /// Checks run cheapest first: challenge syntax, freshness, star content,
    /// then signature recovery. Any rejection leaves the ledger untouched; on
    /// success exactly one block is appended.
    pub async fn submit(
        &self,
        address: &WalletAddress,
        challenge: &str,
        signature: &str,
        star: Star,
    ) -> Result<Block, RegistryError> {
        let parsed: OwnershipChallenge = challenge.parse()?;
        if parsed.address != *address {
            warn!(%address, challenged = %parsed.address, "challenge issued for another address");
            return Err(RegistryError::MalformedChallenge(format!(
                "challenge was issued for {}, not {address}",
                parsed.address
            )));
        }

        let window = self.config.validation_window_secs;
        let now = self.clock.now();
        if parsed.is_expired(now, window) {
            let elapsed = parsed.elapsed(now);
            warn!(
                %address,
                age = %format_duration(elapsed),
                "rejected submission with expired challenge"
            );
            return Err(RegistryError::ExpiredChallenge { elapsed, window });
        }

        star.validate(&self.config)?;

        let signature = signature
            .parse::<MessageSignature>()
            .map_err(|e| RegistryError::InvalidSignature(e.to_string()))?;
        if !verify_message(challenge.as_bytes(), &signature, address) {
            warn!(%address, "rejected submission with invalid signature");
            return Err(RegistryError::InvalidSignature(format!(
                "signature does not prove control of {address}"
            )));
        }

        let claim = StarClaim {
            star,
            owner: address.clone(),
        };
        let block = self.ledger.append_encoded(&self.codec, &claim).await?;
        info!(%address, height = block.height, hash = %block.hash, "star registered");

        if self.config.validate_after_append {
            // Findings never undo the append.
            let findings = self.ledger.validate().await;
            if !findings.is_empty() {
                warn!(
                    %address,
                    height = block.height,
                    findings = findings.len(),
                    "ledger integrity check failed after submission"
                );
            }
        }

        Ok(block)
    }
}
