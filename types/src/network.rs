//! Address network identifier.

use serde::{Deserialize, Serialize};

/// Which network an address belongs to, as encoded in its version byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressNetwork {
    /// Production addresses (P2PKH version `0x00`, leading `1`).
    Main,
    /// Test-network addresses (P2PKH version `0x6f`, leading `m` or `n`).
    Test,
}

impl AddressNetwork {
    /// P2PKH version byte for this network.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Self::Main => 0x00,
            Self::Test => 0x6f,
        }
    }

    /// Map a P2PKH version byte back to its network.
    pub fn from_p2pkh_version(version: u8) -> Option<Self> {
        match version {
            0x00 => Some(Self::Main),
            0x6f => Some(Self::Test),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }
}

impl std::fmt::Display for AddressNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
