//! Chain-integrity validation.
//!
//! Findings are soft: they are collected into a report, never raised, and
//! the ledger stays usable whatever they say.

use notary_types::BlockHash;
use serde::Serialize;
use std::fmt;

/// One integrity violation, tagged with the height (position) of the block at fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The stored hash no longer matches the block's content.
    Tampered {
        height: u64,
        stored: BlockHash,
        computed: BlockHash,
    },
    /// The block's link does not point at its predecessor's hash
    /// (or, for genesis, a link is present at all).
    BrokenLink {
        height: u64,
        expected: Option<BlockHash>,
        found: Option<BlockHash>,
    },
}

impl ValidationError {
    pub fn height(&self) -> u64 {
        match self {
            Self::Tampered { height, .. } | Self::BrokenLink { height, .. } => *height,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tampered {
                height,
                stored,
                computed,
            } => write!(
                f,
                "block {height} tampered: stored hash {stored}, content hashes to {computed}"
            ),
            Self::BrokenLink {
                height,
                expected,
                found,
            } => write!(
                f,
                "block {height} broken link: expected previous {}, found {}",
                display_link(expected),
                display_link(found)
            ),
        }
    }
}

fn display_link(link: &Option<BlockHash>) -> String {
    link.map(|h| h.to_string()).unwrap_or_else(|| "none".to_string())
}

/// Validate a block sequence in height order.
///
/// For each block: first the tamper check, then the link check. Every
/// violation is reported, not just the first.
pub fn validate_chain(blocks: &[crate::Block]) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    let mut expected_previous: Option<BlockHash> = None;

    for (position, block) in blocks.iter().enumerate() {
        let height = position as u64;

        let computed = block.compute_hash();
        if computed != block.hash {
            findings.push(ValidationError::Tampered {
                height,
                stored: block.hash,
                computed,
            });
        }

        if block.previous_hash != expected_previous {
            findings.push(ValidationError::BrokenLink {
                height,
                expected: expected_previous,
                found: block.previous_hash,
            });
        }

        expected_previous = Some(block.hash);
    }

    findings
}
