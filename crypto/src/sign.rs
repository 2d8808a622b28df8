//! Wallet-compatible "signed message" signing and verification.
//!
//! The scheme is the one implemented by common wallet software:
//!
//! 1. digest = sha256d(`"\x18Bitcoin Signed Message:\n"` || varint(len(msg)) || msg)
//! 2. a compact recoverable secp256k1 signature over the digest, prefixed with a
//!    header byte carrying the recovery id and the public key compression flag
//! 3. verification recovers the public key, derives its P2PKH address and
//!    compares it against the claimed address
//!
//! No public key is ever transmitted; the address alone identifies the signer.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use notary_types::{MessageSignature, WalletAddress};

use crate::{decode_address, derive_address, sha256d, CryptoError, KeyPair};

/// Length-prefixed magic string mixed into every signed-message digest.
const MESSAGE_MAGIC: &[u8] = b"\x18Bitcoin Signed Message:\n";

/// Header offset for uncompressed-key signatures; compressed ones add 4.
const HEADER_BASE: u8 = 27;

/// Append a Bitcoin-style variable length integer.
fn write_varint(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Digest that a wallet signs when asked to sign `message`.
pub fn message_digest(message: &[u8]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(MESSAGE_MAGIC.len() + 9 + message.len());
    buf.extend_from_slice(MESSAGE_MAGIC);
    write_varint(&mut buf, message.len() as u64);
    buf.extend_from_slice(message);
    sha256d(&buf)
}

/// Sign a message the way a wallet would, returning the compact signature.
///
/// `compressed` selects which of the key's two addresses the signature proves.
pub fn sign_message(
    message: &[u8],
    keypair: &KeyPair,
    compressed: bool,
) -> Result<MessageSignature, CryptoError> {
    let digest = message_digest(message);
    let (signature, recovery_id) = keypair
        .signing_key()
        .sign_prehash_recoverable(&digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    let mut bytes = [0u8; 65];
    bytes[0] = HEADER_BASE + recovery_id.to_byte() + if compressed { 4 } else { 0 };
    bytes[1..].copy_from_slice(&signature.to_bytes());
    Ok(MessageSignature::new(bytes))
}

/// Recover the signer's public key and compression flag from a signed message.
///
/// High-S signatures are normalized first (flipping the recovery parity), so
/// signatures from wallets that do not enforce low-S still recover correctly.
pub fn recover_public_key(
    message: &[u8],
    signature: &MessageSignature,
) -> Option<(VerifyingKey, bool)> {
    let (recid, compressed) = signature.recovery()?;
    let mut sig = Signature::from_slice(signature.compact()).ok()?;
    let mut recovery_id = RecoveryId::from_byte(recid)?;
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let digest = message_digest(message);
    let key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id).ok()?;
    Some((key, compressed))
}

/// Verify that `signature` over `message` was produced by the key behind `address`.
///
/// Returns `false` for malformed signatures and unparseable addresses.
pub fn verify_message(message: &[u8], signature: &MessageSignature, address: &WalletAddress) -> bool {
    let Some((network, _)) = decode_address(address.as_str()) else {
        return false;
    };
    let Some((key, compressed)) = recover_public_key(message, signature) else {
        return false;
    };
    derive_address(&key, compressed, network) == *address
}
