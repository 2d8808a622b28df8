//! Star claim payload.

use notary_types::WalletAddress;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{RegistryConfig, RegistryError};

/// Celestial coordinates and an optional story, as submitted by the owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Declination.
    pub dec: String,

    /// Right ascension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra: Option<String>,

    /// Magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<String>,

    /// Constellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cen: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,

    /// Any further fields the owner submitted, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Star {
    pub fn new(dec: impl Into<String>) -> Self {
        Self {
            dec: dec.into(),
            ra: None,
            mag: None,
            cen: None,
            story: None,
            extra: Map::new(),
        }
    }

    pub fn with_ra(mut self, ra: impl Into<String>) -> Self {
        self.ra = Some(ra.into());
        self
    }

    pub fn with_mag(mut self, mag: impl Into<String>) -> Self {
        self.mag = Some(mag.into());
        self
    }

    pub fn with_cen(mut self, cen: impl Into<String>) -> Self {
        self.cen = Some(cen.into());
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = Some(story.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Check the star against the configured content limits.
    pub fn validate(&self, config: &RegistryConfig) -> Result<(), RegistryError> {
        if self.dec.trim().is_empty() {
            return Err(RegistryError::InvalidStar("dec must not be empty".into()));
        }
        if let Some(story) = &self.story {
            if story.len() > config.max_story_bytes {
                return Err(RegistryError::InvalidStar(format!(
                    "story is {} bytes, limit is {}",
                    story.len(),
                    config.max_story_bytes
                )));
            }
            let words = story.split_whitespace().count();
            if words > config.max_story_words {
                return Err(RegistryError::InvalidStar(format!(
                    "story is {words} words, limit is {}",
                    config.max_story_words
                )));
            }
        }
        Ok(())
    }
}

/// What a submission stores in the ledger: the star plus the verified owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarClaim {
    pub star: Star,
    pub owner: WalletAddress,
}
