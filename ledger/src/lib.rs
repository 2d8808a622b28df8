//! Append-only, hash-chained ledger.
//!
//! A single ordered sequence of immutable blocks, each linked to its
//! predecessor by hash. Appends are linearized behind one writer lock;
//! readers traverse a consistent snapshot under the shared read lock.

pub mod block;
pub mod codec;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod validation;

pub use block::Block;
pub use codec::{JsonCodec, PayloadCodec};
pub use error::{DecodeError, LedgerError};
pub use genesis::{create_genesis_block, is_genesis, GENESIS_PAYLOAD};
pub use ledger::Ledger;
pub use validation::{validate_chain, ValidationError};
