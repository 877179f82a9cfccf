//! Running tick extent of the samples recorded by a checker.
//!
//! Before any sample is recorded both bounds are unset. An unset minimum compares like positive
//! infinity and an unset maximum like negative infinity, so the first recorded tick always sets
//! the minimum.
//!
//! Recording a tick moves **at most one** bound: the minimum moves if the tick is less than or
//! equal to it, otherwise the maximum moves if the tick is greater than or equal to it. As a
//! consequence the second recorded tick only sets the maximum if it is strictly greater than the
//! first one.
//!
//! ```rust
//! use simsos_checker::TickBounds;
//!
//! let mut bounds = TickBounds::new();
//! assert!(bounds.is_unset());
//!
//! bounds.record(7);
//! assert_eq!((bounds.min(), bounds.max()), (Some(7), None));
//!
//! bounds.record(9);
//! assert_eq!((bounds.min(), bounds.max()), (Some(7), Some(9)));
//!
//! bounds.record(8);  // between the bounds, nothing moves
//! assert_eq!((bounds.min(), bounds.max()), (Some(7), Some(9)));
//! ```

use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickBounds {
    min: Option<i64>,
    max: Option<i64>,
}

impl TickBounds {
    /// Create bounds with neither the minimum nor the maximum set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest recorded tick, or [`None`] if no tick has been recorded.
    pub fn min(&self) -> Option<i64> {
        self.min
    }

    /// Largest recorded tick, or [`None`] if the maximum has never moved.
    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// Returns `true` if no tick has moved either bound.
    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Record a tick, moving the minimum or else the maximum.
    pub fn record(&mut self, tick: i64) {
        if !matches!(self.min, Some(min) if min < tick) {
            trace!(tick, previous = ?self.min, "moving minimum tick");
            self.min = Some(tick);
        } else if !matches!(self.max, Some(max) if max > tick) {
            trace!(tick, previous = ?self.max, "moving maximum tick");
            self.max = Some(tick);
        }
    }
}
