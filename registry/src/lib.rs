//! Star registry — the ownership-verified submission workflow on top of the ledger.
//!
//! Flow:
//! 1. [`ChallengeService::issue`] hands the client a challenge string binding
//!    its address to the issuance time. Nothing is stored server-side.
//! 2. The client signs the challenge with its wallet.
//! 3. [`SubmissionWorkflow::submit`] checks freshness, then the signature, then
//!    appends `{star, owner}` to the ledger.
//! 4. [`StarLookup`] projects decoded claims back out of the ledger by owner.
//!
//! [`StarRegistry`] bundles all of it behind one cloneable handle.

pub mod challenge;
pub mod config;
pub mod error;
pub mod lookup;
pub mod registry;
pub mod star;
pub mod submission;

pub use challenge::{ChallengeService, OwnershipChallenge, CHALLENGE_SUFFIX};
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use lookup::StarLookup;
pub use registry::StarRegistry;
pub use star::{Star, StarClaim};
pub use submission::SubmissionWorkflow;
