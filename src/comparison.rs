//! Relational operators used to compare a sample benefit against a baseline.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relational operator applied as `benefit ~ baseline`.
///
/// The operator is written using its symbol in configuration files and property strings:
///
/// | variant                 | symbol       |
/// | ----------------------- | ------------ |
/// | `LessThan`              | `<`          |
/// | `GreaterThan`           | `>`          |
/// | `EqualTo`               | `=` or `==`  |
/// | `LessThanOrEqualTo`     | `<=`         |
/// | `GreaterThanOrEqualTo`  | `>=`         |
///
/// ```rust
/// use simsos_checker::Comparison;
///
/// let op: Comparison = ">=".parse().unwrap();
///
/// assert_eq!(op, Comparison::GreaterThanOrEqualTo);
/// assert!(op.holds(100, 100));
/// assert!(!op.holds(99, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "<")]
    LessThan,

    #[serde(rename = ">")]
    GreaterThan,

    #[serde(rename = "=", alias = "==")]
    EqualTo,

    #[serde(rename = "<=")]
    LessThanOrEqualTo,

    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
}

impl Comparison {
    pub const ALL: [Comparison; 5] = [
        Comparison::LessThan,
        Comparison::GreaterThan,
        Comparison::EqualTo,
        Comparison::LessThanOrEqualTo,
        Comparison::GreaterThanOrEqualTo,
    ];

    /// Returns `true` if `lhs ~ rhs` holds for this operator.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparison::LessThan => lhs < rhs,
            Comparison::GreaterThan => lhs > rhs,
            Comparison::EqualTo => lhs == rhs,
            Comparison::LessThanOrEqualTo => lhs <= rhs,
            Comparison::GreaterThanOrEqualTo => lhs >= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::LessThan => "<",
            Comparison::GreaterThan => ">",
            Comparison::EqualTo => "=",
            Comparison::LessThanOrEqualTo => "<=",
            Comparison::GreaterThanOrEqualTo => ">=",
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error produced when parsing an unknown operator symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown comparison operator \"{0}\"")]
pub struct ParseComparisonError(String);

impl ParseComparisonError {
    /// Returns the text that could not be parsed.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Comparison {
    type Err = ParseComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" => Ok(Comparison::LessThan),
            ">" => Ok(Comparison::GreaterThan),
            "=" | "==" => Ok(Comparison::EqualTo),
            "<=" => Ok(Comparison::LessThanOrEqualTo),
            ">=" => Ok(Comparison::GreaterThanOrEqualTo),
            other => Err(ParseComparisonError(other.to_owned())),
        }
    }
}
