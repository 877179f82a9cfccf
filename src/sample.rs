//! Observations produced by the simulator.
//!
//! A checker only reads two values from a simulation run: the number of ticks the run took and
//! the SoS benefit accumulated over the run. Any type exposing those two values can be evaluated
//! by implementing the [`Sample`] trait. The [`SimResult`] type is a plain value carrying both.
//!
//! ```rust
//! use simsos_checker::{Sample, SimResult};
//!
//! let result = SimResult::new(12, -40);
//! assert_eq!(result.num_ticks(), 12);
//! assert_eq!(result.sos_benefit(), -40);
//!
//! // A (ticks, benefit) pair works as well
//! assert_eq!((12_i64, -40_i64).sos_benefit(), -40);
//! ```

use serde::{Deserialize, Serialize};

/// Trait representing the result of a single simulation run.
pub trait Sample {
    /// Number of ticks elapsed when the run ended.
    fn num_ticks(&self) -> i64;

    /// Benefit accumulated by the System-of-Systems over the run. May be negative.
    fn sos_benefit(&self) -> i64;
}

impl<T> Sample for &T
where
    T: Sample + ?Sized,
{
    fn num_ticks(&self) -> i64 {
        (**self).num_ticks()
    }

    fn sos_benefit(&self) -> i64 {
        (**self).sos_benefit()
    }
}

impl Sample for (i64, i64) {
    fn num_ticks(&self) -> i64 {
        self.0
    }

    fn sos_benefit(&self) -> i64 {
        self.1
    }
}

/// Immutable outcome of a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimResult {
    ticks: i64,
    benefit: i64,
}

impl SimResult {
    /// Create a result for a run that ended after `ticks` ticks with the given SoS benefit.
    pub fn new(ticks: i64, benefit: i64) -> Self {
        Self { ticks, benefit }
    }
}

impl From<(i64, i64)> for SimResult {
    fn from((ticks, benefit): (i64, i64)) -> Self {
        Self::new(ticks, benefit)
    }
}

impl Sample for SimResult {
    fn num_ticks(&self) -> i64 {
        self.ticks
    }

    fn sos_benefit(&self) -> i64 {
        self.benefit
    }
}
