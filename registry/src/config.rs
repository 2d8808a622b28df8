//! Registry configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use notary_utils::LogFormat;

use crate::RegistryError;

/// Configuration for a star registry.
///
/// Can be loaded from a TOML file via [`RegistryConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How long an ownership challenge stays usable after issuance, in seconds.
    #[serde(default = "default_validation_window")]
    pub validation_window_secs: u64,

    /// Run a full chain validation after every successful submission and log findings.
    #[serde(default = "default_true")]
    pub validate_after_append: bool,

    /// Maximum star story size in bytes.
    #[serde(default = "default_max_story_bytes")]
    pub max_story_bytes: usize,

    /// Maximum star story length in whitespace-separated words.
    #[serde(default = "default_max_story_words")]
    pub max_story_words: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_validation_window() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

fn default_max_story_bytes() -> usize {
    500
}

fn default_max_story_words() -> usize {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RegistryError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RegistryError> {
        toml::from_str(s).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber described by `log_format` / `log_level`.
    pub fn init_logging(&self) -> Result<(), RegistryError> {
        notary_utils::init_logging(self.log_format, &self.log_level)
            .map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, RegistryError> {
        toml::to_string_pretty(self).map_err(|e| RegistryError::Config(e.to_string()))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            validation_window_secs: default_validation_window(),
            validate_after_append: default_true(),
            max_story_bytes: default_max_story_bytes(),
            max_story_words: default_max_story_words(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = RegistryConfig::default();
        let toml_str = config.to_toml_string().expect("serializable");
        let parsed = RegistryConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.validation_window_secs, 300);
        assert!(config.validate_after_append);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            validation_window_secs = 60
            log_format = "json"
        "#;
        let config = RegistryConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.validation_window_secs, 60);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.max_story_bytes, 500); // default
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "validate_after_append = false").unwrap();
        let config = RegistryConfig::from_toml_file(file.path()).expect("should load");
        assert!(!config.validate_after_append);
    }

    #[test]
    fn logging_installs_once() {
        let config = RegistryConfig::default();
        let _ = config.init_logging();
        assert!(matches!(config.init_logging(), Err(RegistryError::Config(_))));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = RegistryConfig::from_toml_file("/nonexistent/registry.toml");
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }
}
