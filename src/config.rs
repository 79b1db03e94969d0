//! Engine tuning loaded from RON.
//!
//! ```ron
//! (
//!     rewards: (participation: 50, victory: 100, knockout: 75, survival: 25),
//!     level_growth_percent: 7,
//! )
//! ```

use crate::progression::XpRewards;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Stat growth per level gained, as a percentage of the current stat.
pub const DEFAULT_LEVEL_GROWTH_PERCENT: u8 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rewards: XpRewards,
    pub level_growth_percent: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rewards: XpRewards::default(),
            level_growth_percent: DEFAULT_LEVEL_GROWTH_PERCENT,
        }
    }
}

impl EngineConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Load a config file. Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EngineConfig::from_ron_str("(rewards: (knockout: 10))").expect("valid RON");
        assert_eq!(config.rewards.knockout, 10);
        assert_eq!(config.rewards.participation, 50);
        assert_eq!(config.level_growth_percent, DEFAULT_LEVEL_GROWTH_PERCENT);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let result = EngineConfig::from_ron_str("(rewards: oops)");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
