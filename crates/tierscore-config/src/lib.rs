//! Configuration system for tierscore.
//!
//! Load the bucket table from TOML or YAML files to change labels and score
//! ranges without code changes. The default configuration is the standard
//! three-bucket table spanning 0 to 10.
//!
//! # Examples
//!
//! Load a custom table from a TOML string:
//!
//! ```
//! use tierscore_config::BucketConfig;
//!
//! let config = BucketConfig::from_toml_str(r#"
//!     [[buckets]]
//!     key = "SKIP"
//!     label = "Skip"
//!     lower = 0.0
//!     upper = 4.99
//!
//!     [[buckets]]
//!     key = "ORDER_AGAIN"
//!     label = "Order Again"
//!     lower = 5.0
//!     upper = 10.0
//! "#).unwrap();
//!
//! let table = config.into_table().unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.label_for("SKIP"), Some("Skip"));
//! ```
//!
//! Use the standard table when no file is present:
//!
//! ```
//! use tierscore_config::BucketConfig;
//!
//! let config = BucketConfig::load("buckets.toml").unwrap_or_default();
//! assert_eq!(config.into_table().unwrap().len(), 3);
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tierscore_core::{Bucket, BucketBounds, BucketTable};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Bucket table configuration.
///
/// A flat list of bucket entries in ascending score order; conversion to a
/// [`BucketTable`] validates keys, intervals and ordering.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BucketConfig {
    /// Bucket entries in ascending score order.
    pub buckets: Vec<BucketEntry>,
}

/// One configured bucket.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BucketEntry {
    /// Stable bucket key.
    pub key: String,
    /// Display label; defaults to the key when omitted.
    #[serde(default)]
    pub label: Option<String>,
    /// Lower score bound, inclusive.
    pub lower: Decimal,
    /// Upper score bound, inclusive.
    pub upper: Decimal,
}

impl Default for BucketConfig {
    fn default() -> Self {
        let buckets = BucketTable::standard()
            .iter()
            .map(|bucket| BucketEntry {
                key: bucket.key.clone(),
                label: Some(bucket.label.clone()),
                lower: bucket.bounds.lower(),
                upper: bucket.bounds.upper(),
            })
            .collect();
        BucketConfig { buckets }
    }
}

impl BucketConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Converts the configuration into a validated [`BucketTable`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the table violates a structural
    /// invariant (empty, duplicate key, inverted interval, overlap).
    pub fn into_table(self) -> Result<BucketTable, ConfigError> {
        let buckets = self
            .buckets
            .into_iter()
            .map(|entry| {
                let bounds = BucketBounds::new(entry.lower, entry.upper)
                    .map_err(|err| ConfigError::Invalid(err.to_string()))?;
                let label = entry.label.unwrap_or_else(|| entry.key.clone());
                Ok(Bucket::new(entry.key, label, bounds))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        BucketTable::new(buckets).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_parsing() {
        let toml = r#"
            [[buckets]]
            key = "NOT_GREAT"
            label = "Not Great"
            lower = 0.0
            upper = 3.49

            [[buckets]]
            key = "AVERAGE"
            label = "Average"
            lower = 3.5
            upper = 6.99

            [[buckets]]
            key = "REALLY_GOOD"
            label = "Really Good"
            lower = 7.0
            upper = 10.0
        "#;

        let table = BucketConfig::from_toml_str(toml).unwrap().into_table().unwrap();
        assert_eq!(table, BucketTable::standard());
    }

    #[test]
    fn yaml_parsing() {
        let yaml = r#"
            buckets:
              - key: NOT_GREAT
                label: Not Great
                lower: 0.0
                upper: 3.49
              - key: AVERAGE
                label: Average
                lower: 3.5
                upper: 6.99
              - key: REALLY_GOOD
                label: Really Good
                lower: 7.0
                upper: 10.0
        "#;

        let table = BucketConfig::from_yaml_str(yaml).unwrap().into_table().unwrap();
        assert_eq!(table, BucketTable::standard());
    }

    #[test]
    fn default_is_the_standard_table() {
        let table = BucketConfig::default().into_table().unwrap();
        assert_eq!(table, BucketTable::standard());
    }

    #[test]
    fn label_defaults_to_the_key() {
        let toml = r#"
            [[buckets]]
            key = "ONLY"
            lower = 0.0
            upper = 10.0
        "#;

        let table = BucketConfig::from_toml_str(toml).unwrap().into_table().unwrap();
        assert_eq!(table.label_for("ONLY"), Some("ONLY"));
    }

    #[test]
    fn overlapping_buckets_fail_conversion() {
        let toml = r#"
            [[buckets]]
            key = "LOW"
            lower = 0.0
            upper = 6.0

            [[buckets]]
            key = "HIGH"
            lower = 5.0
            upper = 10.0
        "#;

        let config = BucketConfig::from_toml_str(toml).unwrap();
        assert!(matches!(config.into_table(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn inverted_interval_fails_conversion() {
        let toml = r#"
            [[buckets]]
            key = "BACKWARDS"
            lower = 9.0
            upper = 2.0
        "#;

        let config = BucketConfig::from_toml_str(toml).unwrap();
        assert!(matches!(config.into_table(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let result = BucketConfig::load("does-not-exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
