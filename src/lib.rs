#![deny(clippy::all)]

//! Bounded threshold checkers for statistical model checking of System-of-Systems simulations.
//!
//! A statistical model checker estimates the probability that a system satisfies a property by
//! drawing many independent simulation runs and turning each run into a [Bernoulli] value: `1` if
//! the run satisfied the property and `0` otherwise. An outer procedure, such as a sequential
//! probability ratio test, aggregates those values into a verdict. This crate provides the inner
//! piece of that loop: the [`Checker`]s that turn a single simulation [`Sample`] into a
//! [`Verdict`].
//!
//! The main checker is the [`ThresholdChecker`], which evaluates the bounded property
//!
//! ```text
//! F<=T (benefit ~ B)
//! ```
//!
//! read as _the run finished within `T` ticks and its accumulated SoS benefit compares to `B`
//! using the operator `~`_, where `~` is one of `<`, `>`, `=`, `<=` or `>=`.
//!
//! [Bernoulli]: https://en.wikipedia.org/wiki/Bernoulli_distribution
//!
//! # Examples
//!
//! ```rust
//! use simsos_checker::{Checker, Comparison, SimResult, ThresholdChecker};
//!
//! let mut checker = ThresholdChecker::new(10, 100, Comparison::GreaterThanOrEqualTo);
//!
//! let verdict = checker.evaluate_sample(&SimResult::new(5, 100));
//! assert_eq!(verdict.as_bernoulli(), 1);
//!
//! let verdict = checker.evaluate_sample(&SimResult::new(3, 50));
//! assert_eq!(verdict.as_bernoulli(), 0);
//! assert_eq!(checker.min_tick(), Some(3));
//! ```
//!
//! Checkers can also be built from configuration, which lets a driver hold them behind a trait
//! object without knowing the concrete kind:
//!
//! ```rust
//! use simsos_checker::{Checker, CheckerKind, SimResult};
//!
//! let kind: CheckerKind = toml::from_str(r#"
//!     kind = "threshold"
//!     base_tick = 10
//!     base_benefit = 100
//!     comparison = ">="
//! "#).unwrap();
//!
//! let mut checker = kind.build::<SimResult>().unwrap();
//! assert!(checker.evaluate_sample(&SimResult::new(4, 120)).is_satisfied());
//! ```

use std::fmt::{Display, Formatter};
use std::ops::Not;

pub mod bounds;
pub mod checkers;
pub mod comparison;
pub mod config;
pub mod sample;

#[cfg(feature = "parser")]
pub mod parser;

pub use crate::bounds::TickBounds;
pub use crate::checkers::{ExistenceChecker, ThresholdChecker};
pub use crate::comparison::{Comparison, ParseComparisonError};
pub use crate::config::{CheckerConfig, CheckerKind, ConfigError};
pub use crate::sample::{Sample, SimResult};

#[cfg(feature = "parser")]
pub use crate::parser::{parse_property, ParsePropertyError};

/// Outcome of evaluating a single sample, convertible into a Bernoulli value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Satisfied,
    NotSatisfied,
}

impl Verdict {
    /// Returns `true` if the sample satisfied the property.
    pub fn is_satisfied(self) -> bool {
        matches!(self, Verdict::Satisfied)
    }

    /// Returns `1` for a satisfied sample and `0` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simsos_checker::Verdict;
    ///
    /// assert_eq!(Verdict::Satisfied.as_bernoulli(), 1);
    /// assert_eq!(Verdict::NotSatisfied.as_bernoulli(), 0);
    /// ```
    pub fn as_bernoulli(self) -> u8 {
        match self {
            Verdict::Satisfied => 1,
            Verdict::NotSatisfied => 0,
        }
    }
}

impl From<bool> for Verdict {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            Verdict::Satisfied
        } else {
            Verdict::NotSatisfied
        }
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> Self {
        verdict.as_bernoulli()
    }
}

/// Flips the verdict. Checkers never do this themselves, a driver honoring a negation flag can.
impl Not for Verdict {
    type Output = Verdict;

    fn not(self) -> Self::Output {
        match self {
            Verdict::Satisfied => Verdict::NotSatisfied,
            Verdict::NotSatisfied => Verdict::Satisfied,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Satisfied => write!(f, "satisfied"),
            Verdict::NotSatisfied => write!(f, "not satisfied"),
        }
    }
}

/// Evaluate simulation samples into Bernoulli [`Verdict`]s.
///
/// A checker is fed samples one at a time by an outer statistical procedure. Evaluating a sample
/// may update bookkeeping inside the checker, which is why [`Checker::evaluate_sample`] takes
/// `&mut self`. The tick bounds report the extent of the samples the checker has recorded, or
/// [`None`] if it has not recorded any.
pub trait Checker<S: ?Sized> {
    /// Evaluate a single sample into a verdict, updating any bookkeeping held by the checker.
    fn evaluate_sample(&mut self, sample: &S) -> Verdict;

    /// Returns `true` if the consumer of the verdicts should invert them.
    fn is_negated(&self) -> bool;

    /// Smallest tick recorded by the checker, or [`None`] if nothing has been recorded.
    fn min_tick(&self) -> Option<i64>;

    /// Largest tick recorded by the checker, or [`None`] if nothing has been recorded.
    fn max_tick(&self) -> Option<i64>;
}

impl<S, T> Checker<S> for &mut T
where
    S: ?Sized,
    T: Checker<S> + ?Sized,
{
    fn evaluate_sample(&mut self, sample: &S) -> Verdict {
        (**self).evaluate_sample(sample)
    }

    fn is_negated(&self) -> bool {
        (**self).is_negated()
    }

    fn min_tick(&self) -> Option<i64> {
        (**self).min_tick()
    }

    fn max_tick(&self) -> Option<i64> {
        (**self).max_tick()
    }
}

impl<S, T> Checker<S> for Box<T>
where
    S: ?Sized,
    T: Checker<S> + ?Sized,
{
    fn evaluate_sample(&mut self, sample: &S) -> Verdict {
        (**self).evaluate_sample(sample)
    }

    fn is_negated(&self) -> bool {
        (**self).is_negated()
    }

    fn min_tick(&self) -> Option<i64> {
        (**self).min_tick()
    }

    fn max_tick(&self) -> Option<i64> {
        (**self).max_tick()
    }
}
