//! Cryptographic primitives for the star notary.
//!
//! - **SHA-256** for block hashes and (doubled) for signed-message digests
//! - **secp256k1** compact recoverable signatures over wallet "signed messages"
//! - Base58check **P2PKH** address derivation (`hash160` of the public key)

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{decode_address, derive_address, validate_address};
pub use error::CryptoError;
pub use hash::{hash160, sha256, sha256_multi, sha256d};
pub use keys::{generate_keypair, keypair_from_seed, KeyPair};
pub use sign::{message_digest, recover_public_key, sign_message, verify_message};
