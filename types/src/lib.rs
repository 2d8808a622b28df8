//! Fundamental types for the star notary ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! block hashes, timestamps, wallet addresses, message signatures and address networks.

pub mod address;
pub mod block;
pub mod error;
pub mod network;
pub mod signature;
pub mod time;

pub use address::WalletAddress;
pub use block::BlockHash;
pub use error::NotaryError;
pub use network::AddressNetwork;
pub use signature::MessageSignature;
pub use time::Timestamp;
