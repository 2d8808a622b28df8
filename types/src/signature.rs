//! Compact recoverable message signature, as produced by wallet software.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::NotaryError;

/// A 65-byte compact signature: one header byte followed by `r || s`.
///
/// The header encodes the public-key recovery id and whether the signer's
/// address was derived from the compressed public key:
///
/// | header  | key encoding  |
/// |---------|---------------|
/// | 27..=30 | uncompressed  |
/// | 31..=34 | compressed    |
/// | 35..=42 | segwit flavours (not supported for verification) |
///
/// The textual form is standard base64 (88 characters).
#[derive(Clone, PartialEq, Eq)]
pub struct MessageSignature([u8; 65]);

impl MessageSignature {
    pub const LEN: usize = 65;

    pub fn new(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    pub fn header(&self) -> u8 {
        self.0[0]
    }

    /// The 64-byte `r || s` part.
    pub fn compact(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Recovery id and compression flag, or `None` for unsupported headers.
    pub fn recovery(&self) -> Option<(u8, bool)> {
        match self.header() {
            h @ 27..=30 => Some((h - 27, false)),
            h @ 31..=34 => Some((h - 31, true)),
            _ => None,
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Debug for MessageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageSignature({})", self.to_base64())
    }
}

impl fmt::Display for MessageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl FromStr for MessageSignature {
    type Err = NotaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = STANDARD
            .decode(s.trim())
            .map_err(|e| NotaryError::InvalidSignatureEncoding(e.to_string()))?;
        let arr: [u8; 65] = bytes.try_into().map_err(|v: Vec<u8>| {
            NotaryError::InvalidSignatureEncoding(format!("expected 65 bytes, got {}", v.len()))
        })?;
        Ok(Self(arr))
    }
}

impl Serialize for MessageSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for MessageSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_header(header: u8) -> MessageSignature {
        let mut bytes = [7u8; 65];
        bytes[0] = header;
        MessageSignature::new(bytes)
    }

    #[test]
    fn base64_text_form_parses_back() {
        let sig = with_header(31);
        let text = sig.to_string();
        assert_eq!(text.len(), 88);
        assert_eq!(text.parse::<MessageSignature>().unwrap(), sig);
    }

    #[test]
    fn header_decodes_recovery() {
        assert_eq!(with_header(27).recovery(), Some((0, false)));
        assert_eq!(with_header(30).recovery(), Some((3, false)));
        assert_eq!(with_header(31).recovery(), Some((0, true)));
        assert_eq!(with_header(34).recovery(), Some((3, true)));
        assert_eq!(with_header(26).recovery(), None);
        assert_eq!(with_header(39).recovery(), None);
    }

    #[test]
    fn wrong_length_rejected() {
        let short = STANDARD.encode([1u8; 64]);
        assert!(matches!(
            short.parse::<MessageSignature>(),
            Err(NotaryError::InvalidSignatureEncoding(_))
        ));
        assert!("not base64!".parse::<MessageSignature>().is_err());
    }
}
