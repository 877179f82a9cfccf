//! Checker implementations.
//!
//! Every checker implements the [`Checker`](crate::Checker) trait, which allows an outer
//! statistical procedure to feed it samples without knowing which kind of checker it holds.
//!
//! # Threshold Checker
//!
//! The [`ThresholdChecker`] evaluates a single bounded threshold comparison. For a horizon of `T`
//! ticks, a baseline benefit `B` and an operator `~`, a sample is satisfied when
//!
//! ```text
//! ticks <= T  and  benefit ~ B
//! ```
//!
//! Samples that finished after the horizon are never satisfied. In addition to the verdict, the
//! checker records the tick extent of the in-horizon samples that did **not** satisfy the
//! comparison, which can be read back with [`ThresholdChecker::min_tick`] and
//! [`ThresholdChecker::max_tick`].
//!
//! ```rust
//! use simsos_checker::{Comparison, SimResult, ThresholdChecker};
//!
//! let mut checker = ThresholdChecker::new(10, 100, Comparison::GreaterThanOrEqualTo);
//!
//! let samples = [(5, 100), (12, 200), (3, 50)];
//! let values: Vec<u8> = samples
//!     .into_iter()
//!     .map(|s| checker.evaluate_sample(&SimResult::from(s)).as_bernoulli())
//!     .collect();
//!
//! assert_eq!(values, vec![1, 0, 0]);
//! assert_eq!(checker.min_tick(), Some(3));
//! assert_eq!(checker.max_tick(), None);
//! ```
//!
//! # Existence Checker
//!
//! The [`ExistenceChecker`] is a placeholder for a checker kind that has not been written yet. It
//! never reports a satisfied sample and always reports zero tick bounds.

mod existence;
mod threshold;

pub use existence::ExistenceChecker;
pub use threshold::ThresholdChecker;
