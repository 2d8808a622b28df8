//! secp256k1 key generation.

use k256::ecdsa::{SigningKey, VerifyingKey};
use notary_types::{AddressNetwork, WalletAddress};
use rand::rngs::OsRng;

use crate::CryptoError;

/// A secp256k1 key pair as held by a wallet.
///
/// The secret half is zeroized on drop by `k256`. This struct intentionally
/// does not implement `Debug` or `Clone`.
pub struct KeyPair {
    secret: SigningKey,
    pub public: VerifyingKey,
}

impl KeyPair {
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.secret
    }

    /// P2PKH address of the compressed public key, the form modern wallets hand out.
    pub fn address(&self, network: AddressNetwork) -> WalletAddress {
        crate::derive_address(&self.public, true, network)
    }

    /// P2PKH address of the uncompressed public key (legacy wallets).
    pub fn uncompressed_address(&self, network: AddressNetwork) -> WalletAddress {
        crate::derive_address(&self.public, false, network)
    }
}

/// Generate a new key pair from a secure random source.
pub fn generate_keypair() -> KeyPair {
    let secret = SigningKey::random(&mut OsRng);
    let public = VerifyingKey::from(&secret);
    KeyPair { secret, public }
}

/// Derive a key pair from a 32-byte secret scalar (deterministic).
///
/// Fails if the bytes are zero or not below the curve order.
pub fn keypair_from_seed(seed: &[u8; 32]) -> Result<KeyPair, CryptoError> {
    let secret =
        SigningKey::from_slice(seed).map_err(|e| CryptoError::InvalidSecretKey(e.to_string()))?;
    let public = VerifyingKey::from(&secret);
    Ok(KeyPair { secret, public })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_deterministic() {
        let a = keypair_from_seed(&[7u8; 32]).unwrap();
        let b = keypair_from_seed(&[7u8; 32]).unwrap();
        assert_eq!(a.public, b.public);
    }

    #[test]
    fn zero_seed_rejected() {
        assert!(matches!(
            keypair_from_seed(&[0u8; 32]),
            Err(CryptoError::InvalidSecretKey(_))
        ));
    }

    #[test]
    fn generated_keys_differ() {
        let a = generate_keypair();
        let b = generate_keypair();
        assert_ne!(a.public, b.public);
    }

    #[test]
    fn compressed_and_uncompressed_addresses_differ() {
        let kp = keypair_from_seed(&[9u8; 32]).unwrap();
        assert_ne!(
            kp.address(AddressNetwork::Main),
            kp.uncompressed_address(AddressNetwork::Main)
        );
    }
}
