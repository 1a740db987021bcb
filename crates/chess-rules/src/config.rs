//! Engine configuration.
//!
//! Configuration only selects strategies; it never changes which moves are
//! legal.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How a hypothetical board is produced for self-check and castling probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStrategy {
    /// Structural deep copy of grid, rosters and history.
    #[default]
    Clone,
    /// Rebuild from the initial setup by replaying the move history.
    Replay,
}

/// Rules engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Probe strategy. Defaults to [`ProbeStrategy::Clone`].
    #[serde(default)]
    pub probe: ProbeStrategy,
}

impl RulesConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_strategy() {
        let config = RulesConfig::from_toml_str(r#"probe = "replay""#).unwrap();
        assert_eq!(config.probe, ProbeStrategy::Replay);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert_eq!(config.probe, ProbeStrategy::Clone);
    }

    #[test]
    fn test_parse_invalid_strategy() {
        let result = RulesConfig::from_toml_str(r#"probe = "parallel""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RulesConfig::load("/nonexistent/rules.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = RulesConfig {
            probe: ProbeStrategy::Replay,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RulesConfig::from_toml_str(&text).unwrap(), config);
    }
}
