//! Ownership challenges — stateless, self-describing messages for the wallet to sign.
//!
//! Wire format (fixed; wallets sign exactly these bytes):
//!
//! ```text
//! <address>:<issued_at_epoch_secs>:starRegistry
//! ```
//!
//! The issuance time travels inside the challenge, so freshness is recomputed
//! at submission and nothing is tracked server-side. Any number of challenges
//! may be outstanding for one address; each is usable until its own window
//! elapses.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use notary_types::{Timestamp, WalletAddress};
use notary_utils::Clock;
use tracing::debug;

use crate::RegistryError;

/// Constant trailer identifying challenges issued by this registry.
pub const CHALLENGE_SUFFIX: &str = "starRegistry";

/// A parsed ownership challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipChallenge {
    pub address: WalletAddress,
    pub issued_at: Timestamp,
}

impl OwnershipChallenge {
    pub fn new(address: WalletAddress, issued_at: Timestamp) -> Self {
        Self { address, issued_at }
    }

    /// The exact string the wallet must sign.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Seconds since issuance, zero if issued "in the future".
    pub fn elapsed(&self, now: Timestamp) -> u64 {
        self.issued_at.elapsed_since(now)
    }

    /// Last instant at which the challenge is still accepted.
    pub fn expires_at(&self, window_secs: u64) -> Timestamp {
        self.issued_at.plus(window_secs)
    }

    pub fn is_expired(&self, now: Timestamp, window_secs: u64) -> bool {
        self.issued_at.has_expired(window_secs, now)
    }
}

impl fmt::Display for OwnershipChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.address,
            self.issued_at.as_secs(),
            CHALLENGE_SUFFIX
        )
    }
}

impl FromStr for OwnershipChallenge {
    type Err = RegistryError;

    /// Parses from the right: the suffix and timestamp are fixed, the address is the rest.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let suffix = parts.next();
        let issued_at = parts.next();
        let address = parts.next();

        let (Some(suffix), Some(issued_at), Some(address)) = (suffix, issued_at, address) else {
            return Err(RegistryError::MalformedChallenge(format!(
                "expected <address>:<timestamp>:{CHALLENGE_SUFFIX}, got {s:?}"
            )));
        };
        if suffix != CHALLENGE_SUFFIX {
            return Err(RegistryError::MalformedChallenge(format!(
                "unknown suffix {suffix:?}"
            )));
        }
        if address.is_empty() {
            return Err(RegistryError::MalformedChallenge("empty address".into()));
        }
        let secs: u64 = issued_at.parse().map_err(|_| {
            RegistryError::MalformedChallenge(format!("bad timestamp {issued_at:?}"))
        })?;

        Ok(Self::new(WalletAddress::new(address), Timestamp::new(secs)))
    }
}

/// Issues ownership challenges stamped with the current time.
#[derive(Clone)]
pub struct ChallengeService {
    clock: Arc<dyn Clock>,
}

impl ChallengeService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Format a fresh challenge for `address`. Creates no server-side state.
    pub fn issue(&self, address: &WalletAddress) -> OwnershipChallenge {
        let challenge = OwnershipChallenge::new(address.clone(), self.clock.now());
        debug!(%address, issued_at = challenge.issued_at.as_secs(), "ownership challenge issued");
        challenge
    }
}
