//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("max_entry_digits must be at least 1")]
    ZeroDigitLimit,
}

/// Tunables for the engine.
///
/// The default imposes no limit on how many digits may be typed into an
/// entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum number of decimal digits in the entry being typed.
    pub max_entry_digits: Option<usize>,
}

impl EngineConfig {
    /// Load configuration from JSON.
    ///
    /// ```rust
    /// use keycalc::core::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{ "max_entry_digits": 12 }"#).unwrap();
    /// assert_eq!(config.max_entry_digits, Some(12));
    ///
    /// let config = EngineConfig::from_json("{}").unwrap();
    /// assert_eq!(config, EngineConfig::default());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_entry_digits {
            Some(0) => Err(ConfigError::ZeroDigitLimit),
            _ => Ok(()),
        }
    }

    /// Whether an entry with `digits` decimal digits is within the limit.
    pub fn allows_digits(&self, digits: usize) -> bool {
        self.max_entry_digits.is_none_or(|max| digits <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = EngineConfig::default();
        assert!(config.allows_digits(usize::MAX));
    }

    #[test]
    fn limit_is_inclusive() {
        let config = EngineConfig {
            max_entry_digits: Some(3),
        };
        assert!(config.allows_digits(3));
        assert!(!config.allows_digits(4));
    }

    #[test]
    fn from_json_rejects_zero_limit() {
        let result = EngineConfig::from_json(r#"{ "max_entry_digits": 0 }"#);
        assert!(matches!(result, Err(ConfigError::ZeroDigitLimit)));
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let result = EngineConfig::from_json(r#"{ "precision": 4 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn null_limit_is_unbounded() {
        let config = EngineConfig::from_json(r#"{ "max_entry_digits": null }"#).unwrap();
        assert_eq!(config.max_entry_digits, None);
    }
}
