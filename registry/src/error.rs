use notary_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed challenge: {0}")]
    MalformedChallenge(String),

    #[error("challenge expired: issued {elapsed}s ago, window is {window}s")]
    ExpiredChallenge { elapsed: u64, window: u64 },

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid star: {0}")]
    InvalidStar(String),

    /// Unexpected internal failure; distinct from the rejection kinds above.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("config error: {0}")]
    Config(String),
}
