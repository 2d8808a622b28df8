//! Wallet address derivation from public keys.
//!
//! Address format (P2PKH): base58check(version || hash160(sec1_public_key)).
//!
//! - version: `0x00` on the main network, `0x6f` on the test network
//! - the public key is SEC1-encoded, compressed (33 bytes) or uncompressed (65 bytes);
//!   the two encodings produce different addresses for the same key
//! - base58check appends the first 4 bytes of `sha256d(payload)` as checksum

use k256::ecdsa::VerifyingKey;
use notary_types::{AddressNetwork, WalletAddress};

use crate::hash160;

/// Version byte plus 20-byte key hash.
const PAYLOAD_LEN: usize = 21;

/// Derive a P2PKH wallet address from a public key.
pub fn derive_address(
    public_key: &VerifyingKey,
    compressed: bool,
    network: AddressNetwork,
) -> WalletAddress {
    let point = public_key.to_encoded_point(compressed);
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(&hash160(point.as_bytes()));
    WalletAddress::new(bs58::encode(payload).with_check().into_string())
}

/// Extract the network and public key hash from a P2PKH address.
///
/// Returns `None` if the address is not valid base58, has a bad checksum,
/// the wrong length, or an unknown version byte.
pub fn decode_address(address: &str) -> Option<(AddressNetwork, [u8; 20])> {
    let payload = bs58::decode(address).with_check(None).into_vec().ok()?;
    if payload.len() != PAYLOAD_LEN {
        return None;
    }
    let network = AddressNetwork::from_p2pkh_version(payload[0])?;
    let mut key_hash = [0u8; 20];
    key_hash.copy_from_slice(&payload[1..]);
    Some((network, key_hash))
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn secret_key_one_has_known_addresses() {
        // The generator point G: the best-known test vector for P2PKH derivation.
        let mut seed = [0u8; 32];
        seed[31] = 1;
        let kp = keypair_from_seed(&seed).unwrap();
        assert_eq!(
            derive_address(&kp.public, true, AddressNetwork::Main).as_str(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
        assert_eq!(
            derive_address(&kp.public, false, AddressNetwork::Main).as_str(),
            "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm"
        );
    }

    #[test]
    fn derive_and_validate() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public, true, AddressNetwork::Main);
        assert!(addr.as_str().starts_with('1'));
        assert!(validate_address(addr.as_str()));
    }

    #[test]
    fn test_network_prefix() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public, true, AddressNetwork::Test);
        assert!(addr.as_str().starts_with('m') || addr.as_str().starts_with('n'));
        let (network, _) = decode_address(addr.as_str()).unwrap();
        assert_eq!(network, AddressNetwork::Test);
    }

    #[test]
    fn decode_yields_key_hash() {
        let kp = keypair_from_seed(&[3u8; 32]).unwrap();
        let addr = derive_address(&kp.public, true, AddressNetwork::Main);
        let (network, key_hash) = decode_address(addr.as_str()).unwrap();
        assert_eq!(network, AddressNetwork::Main);
        assert_eq!(key_hash, hash160(kp.public.to_encoded_point(true).as_bytes()));
    }

    #[test]
    fn invalid_checksum_rejected() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public, true, AddressNetwork::Main);
        let mut bad = addr.as_str().to_string();
        let last = bad.pop().unwrap();
        let replacement = if last == '2' { '3' } else { '2' };
        bad.push(replacement);
        assert!(!validate_address(&bad));
    }

    #[test]
    fn garbage_rejected() {
        assert!(!validate_address(""));
        assert!(!validate_address("1A2b3C"));
        assert!(!validate_address("0OIl"));
    }
}
