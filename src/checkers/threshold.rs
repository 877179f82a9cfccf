use tracing::debug;

use crate::bounds::TickBounds;
use crate::comparison::Comparison;
use crate::sample::Sample;
use crate::{Checker, Verdict};

/// Bounded threshold checker, written `F<=T (benefit ~ B)`.
///
/// The checker holds a tick horizon, a baseline benefit and a [`Comparison`], all fixed at
/// construction. Evaluating a sample proceeds as follows:
///
///   1. If the sample finished after the horizon it is not satisfied and nothing is recorded.
///   2. If the sample benefit satisfies the comparison against the baseline, the sample is
///      satisfied and nothing is recorded.
///   3. Otherwise the sample tick is recorded in the [`TickBounds`] and the sample is not
///      satisfied.
///
/// The checker also carries a negation flag. The flag does not change the verdicts produced by the
/// checker, the procedure consuming the verdicts reads it with [`ThresholdChecker::is_negated`]
/// and decides whether to invert them.
///
/// ```rust
/// use simsos_checker::{Comparison, SimResult, ThresholdChecker};
///
/// let mut checker = ThresholdChecker::new(10, 50, Comparison::LessThan);
///
/// assert!(checker.evaluate_sample(&SimResult::new(4, 20)).is_satisfied());
/// assert!(!checker.evaluate_sample(&SimResult::new(11, 20)).is_satisfied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdChecker {
    base_tick: i64,
    base_benefit: i64,
    comparison: Comparison,
    negation: bool,
    bounds: TickBounds,
}

impl ThresholdChecker {
    pub fn new(base_tick: i64, base_benefit: i64, comparison: Comparison) -> Self {
        Self {
            base_tick,
            base_benefit,
            comparison,
            negation: false,
            bounds: TickBounds::new(),
        }
    }

    /// Evaluate a single sample, recording its tick if it is in the horizon but not satisfied.
    pub fn evaluate_sample<S>(&mut self, sample: &S) -> Verdict
    where
        S: Sample + ?Sized,
    {
        let ticks = sample.num_ticks();
        let benefit = sample.sos_benefit();

        let verdict = if ticks > self.base_tick {
            Verdict::NotSatisfied
        } else if self.comparison.holds(benefit, self.base_benefit) {
            Verdict::Satisfied
        } else {
            self.bounds.record(ticks);
            Verdict::NotSatisfied
        };

        debug!(ticks, benefit, %verdict, "evaluated sample");
        verdict
    }

    pub fn set_negation(&mut self) {
        debug!("negation set");
        self.negation = true;
    }

    pub fn set_not_negation(&mut self) {
        debug!("negation cleared");
        self.negation = false;
    }

    pub fn is_negated(&self) -> bool {
        self.negation
    }

    pub fn base_tick(&self) -> i64 {
        self.base_tick
    }

    pub fn base_benefit(&self) -> i64 {
        self.base_benefit
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn bounds(&self) -> &TickBounds {
        &self.bounds
    }

    /// Smallest recorded tick, or [`None`] if no tick has been recorded.
    pub fn min_tick(&self) -> Option<i64> {
        self.bounds.min()
    }

    /// Largest recorded tick, or [`None`] if the maximum has never moved.
    pub fn max_tick(&self) -> Option<i64> {
        self.bounds.max()
    }
}

impl<S> Checker<S> for ThresholdChecker
where
    S: Sample + ?Sized,
{
    fn evaluate_sample(&mut self, sample: &S) -> Verdict {
        ThresholdChecker::evaluate_sample(self, sample)
    }

    fn is_negated(&self) -> bool {
        ThresholdChecker::is_negated(self)
    }

    fn min_tick(&self) -> Option<i64> {
        ThresholdChecker::min_tick(self)
    }

    fn max_tick(&self) -> Option<i64> {
        ThresholdChecker::max_tick(self)
    }
}

#[cfg(test)]
mod tests {
    use super::ThresholdChecker;
    use crate::comparison::Comparison;
    use crate::sample::SimResult;
    use crate::Verdict;

    fn sample(ticks: i64, benefit: i64) -> SimResult {
        SimResult::new(ticks, benefit)
    }

    #[test]
    fn threshold_scenario() {
        let mut checker = ThresholdChecker::new(10, 100, Comparison::GreaterThanOrEqualTo);

        assert_eq!(checker.evaluate_sample(&sample(5, 100)), Verdict::Satisfied);
        assert!(checker.bounds().is_unset());

        assert_eq!(checker.evaluate_sample(&sample(12, 200)), Verdict::NotSatisfied);
        assert!(checker.bounds().is_unset());

        assert_eq!(checker.evaluate_sample(&sample(3, 50)), Verdict::NotSatisfied);
        assert_eq!(checker.min_tick(), Some(3));
        assert_eq!(checker.max_tick(), None);
    }

    #[test]
    fn operator_table() {
        let expected = [
            (Comparison::LessThan, 0),
            (Comparison::GreaterThan, 0),
            (Comparison::EqualTo, 1),
            (Comparison::LessThanOrEqualTo, 1),
            (Comparison::GreaterThanOrEqualTo, 1),
        ];

        for (op, value) in expected {
            let mut checker = ThresholdChecker::new(10, 50, op);
            let verdict = checker.evaluate_sample(&sample(10, 50));

            assert_eq!(verdict.as_bernoulli(), value, "operator {op}");
        }
    }

    #[test]
    fn horizon_is_inclusive() {
        let mut checker = ThresholdChecker::new(10, 0, Comparison::GreaterThan);

        assert_eq!(checker.evaluate_sample(&sample(10, 1)), Verdict::Satisfied);
        assert_eq!(checker.evaluate_sample(&sample(11, 1)), Verdict::NotSatisfied);
        assert!(checker.bounds().is_unset());
    }

    #[test]
    fn satisfied_samples_are_not_recorded() {
        let mut checker = ThresholdChecker::new(100, 0, Comparison::GreaterThan);

        checker.evaluate_sample(&sample(50, -1));
        checker.evaluate_sample(&sample(1, 5));
        checker.evaluate_sample(&sample(99, 5));

        assert_eq!(checker.min_tick(), Some(50));
        assert_eq!(checker.max_tick(), None);
    }

    #[test]
    fn failing_samples_move_one_bound() {
        let mut checker = ThresholdChecker::new(100, 0, Comparison::EqualTo);

        checker.evaluate_sample(&sample(20, 1));
        checker.evaluate_sample(&sample(40, 1));
        checker.evaluate_sample(&sample(30, 1));
        checker.evaluate_sample(&sample(10, 1));

        assert_eq!(checker.min_tick(), Some(10));
        assert_eq!(checker.max_tick(), Some(40));
    }

    #[test]
    fn negation_is_inert() {
        let mut checker = ThresholdChecker::new(10, 50, Comparison::LessThanOrEqualTo);
        let reference = checker.clone();

        checker.set_negation();
        assert!(checker.is_negated());
        assert_eq!(checker.evaluate_sample(&sample(5, 40)), Verdict::Satisfied);

        checker.set_not_negation();
        assert!(!checker.is_negated());
        assert_eq!(checker.evaluate_sample(&sample(5, 40)), Verdict::Satisfied);

        assert_eq!(checker, reference);
    }

    #[test]
    fn bounds_are_stable_between_evaluations() {
        let mut checker = ThresholdChecker::new(10, 0, Comparison::LessThan);
        checker.evaluate_sample(&sample(2, 5));

        assert_eq!(checker.min_tick(), checker.min_tick());
        assert_eq!(checker.max_tick(), checker.max_tick());
        assert_eq!(checker.min_tick(), Some(2));
    }

    #[test]
    fn negative_horizon_rejects_everything() {
        let mut checker = ThresholdChecker::new(-1, 0, Comparison::GreaterThanOrEqualTo);

        assert_eq!(checker.evaluate_sample(&sample(0, 10)), Verdict::NotSatisfied);
        assert!(checker.bounds().is_unset());
    }
}
