//! Construct checkers from TOML configuration.
//!
//! A [`CheckerConfig`] describes a [`ThresholdChecker`]:
//!
//! ```toml
//! base_tick = 10
//! base_benefit = 100
//! comparison = ">="
//! negated = false   # optional
//! validate = false  # optional
//! ```
//!
//! Any integer is accepted for the horizon and baseline. Setting `validate = true` rejects a
//! negative `base_tick`, which would otherwise produce a checker that rejects every sample.
//!
//! A [`CheckerKind`] selects between the checker variants using a `kind` key and builds a boxed
//! [`Checker`]:
//!
//! ```rust
//! use simsos_checker::{CheckerKind, SimResult};
//!
//! let kind = CheckerKind::from_toml_str(r#"kind = "existence""#).unwrap();
//! let mut checker = kind.build::<SimResult>().unwrap();
//!
//! assert_eq!(checker.evaluate_sample(&SimResult::new(1, 1)).as_bernoulli(), 0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::checkers::{ExistenceChecker, ThresholdChecker};
use crate::comparison::Comparison;
use crate::sample::Sample;
use crate::Checker;

/// Error produced while loading or validating a checker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode configuration: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Tick horizon must be non-negative, got {0}")]
    NegativeHorizon(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub base_tick: i64,
    pub base_benefit: i64,
    pub comparison: Comparison,

    #[serde(default)]
    pub negated: bool,

    #[serde(default)]
    pub validate: bool,
}

impl CheckerConfig {
    pub fn new(base_tick: i64, base_benefit: i64, comparison: Comparison) -> Self {
        Self {
            base_tick,
            base_benefit,
            comparison,
            negated: false,
            validate: false,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the configuration if validation is enabled, otherwise accept it as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validate && self.base_tick < 0 {
            return Err(ConfigError::NegativeHorizon(self.base_tick));
        }

        Ok(())
    }

    pub fn build(&self) -> Result<ThresholdChecker, ConfigError> {
        self.validate()?;

        let mut checker = ThresholdChecker::new(self.base_tick, self.base_benefit, self.comparison);

        if self.negated {
            checker.set_negation();
        }

        debug!(
            base_tick = self.base_tick,
            base_benefit = self.base_benefit,
            comparison = %self.comparison,
            negated = self.negated,
            "built threshold checker"
        );

        Ok(checker)
    }
}

/// Checker variant selected by the `kind` key of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckerKind {
    Threshold(CheckerConfig),
    Existence,
}

impl CheckerKind {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build the selected checker behind a trait object.
    pub fn build<S>(&self) -> Result<Box<dyn Checker<S> + Send>, ConfigError>
    where
        S: Sample + ?Sized,
    {
        match self {
            CheckerKind::Threshold(config) => Ok(Box::new(config.build()?)),
            CheckerKind::Existence => Ok(Box::new(ExistenceChecker::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckerConfig, CheckerKind, ConfigError};
    use crate::comparison::Comparison;
    use crate::sample::SimResult;

    #[test]
    fn threshold_config() {
        let config = CheckerConfig::from_toml_str(
            r#"
            base_tick = 10
            base_benefit = 100
            comparison = ">="
            "#,
        )
        .unwrap();

        assert_eq!(config, CheckerConfig::new(10, 100, Comparison::GreaterThanOrEqualTo));

        let checker = config.build().unwrap();
        assert_eq!(checker.base_tick(), 10);
        assert_eq!(checker.base_benefit(), 100);
        assert_eq!(checker.comparison(), Comparison::GreaterThanOrEqualTo);
        assert!(!checker.is_negated());
    }

    #[test]
    fn negated_config() {
        let config = CheckerConfig::from_toml_str(
            r#"
            base_tick = 3
            base_benefit = -2
            comparison = "=="
            negated = true
            "#,
        )
        .unwrap();

        let checker = config.build().unwrap();
        assert_eq!(checker.comparison(), Comparison::EqualTo);
        assert!(checker.is_negated());
    }

    #[test]
    fn unknown_operator() {
        let result = CheckerConfig::from_toml_str(
            r#"
            base_tick = 3
            base_benefit = 2
            comparison = "=>"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn validation() {
        let mut config = CheckerConfig::new(-5, 0, Comparison::LessThan);
        assert!(config.build().is_ok());

        config.validate = true;
        assert!(matches!(config.build(), Err(ConfigError::NegativeHorizon(-5))));

        config.base_tick = 0;
        assert!(config.build().is_ok());
    }

    #[test]
    fn checker_kinds() {
        let kind = CheckerKind::from_toml_str(
            r#"
            kind = "threshold"
            base_tick = 10
            base_benefit = 50
            comparison = "="
            "#,
        )
        .unwrap();

        assert_eq!(kind, CheckerKind::Threshold(CheckerConfig::new(10, 50, Comparison::EqualTo)));

        let mut checker = kind.build::<SimResult>().unwrap();
        assert_eq!(checker.evaluate_sample(&SimResult::new(10, 50)).as_bernoulli(), 1);
        assert_eq!(checker.evaluate_sample(&SimResult::new(4, 49)).as_bernoulli(), 0);
        assert_eq!(checker.min_tick(), Some(4));
        assert!(!checker.is_negated());

        let mut stub = CheckerKind::Existence.build::<SimResult>().unwrap();
        assert_eq!(stub.evaluate_sample(&SimResult::new(10, 50)).as_bernoulli(), 0);
        assert_eq!(stub.max_tick(), Some(0));
    }

    #[test]
    fn missing_file() {
        let result = CheckerConfig::from_file("/nonexistent/checker.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
