use crate::{Checker, Verdict};

/// Placeholder for a checker that determines whether a state exists in a run.
///
/// Every sample evaluates to [`Verdict::NotSatisfied`] and both tick bounds are always `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExistenceChecker;

impl ExistenceChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn is_negated(&self) -> bool {
        false
    }

    pub fn min_tick(&self) -> Option<i64> {
        Some(0)
    }

    pub fn max_tick(&self) -> Option<i64> {
        Some(0)
    }
}

impl<S: ?Sized> Checker<S> for ExistenceChecker {
    fn evaluate_sample(&mut self, _: &S) -> Verdict {
        Verdict::NotSatisfied
    }

    fn is_negated(&self) -> bool {
        ExistenceChecker::is_negated(self)
    }

    fn min_tick(&self) -> Option<i64> {
        ExistenceChecker::min_tick(self)
    }

    fn max_tick(&self) -> Option<i64> {
        ExistenceChecker::max_tick(self)
    }
}

#[cfg(test)]
mod tests {
    use super::ExistenceChecker;
    use crate::sample::SimResult;
    use crate::{Checker, Verdict};

    #[test]
    fn never_satisfied() {
        let mut checker = ExistenceChecker::new();

        for (ticks, benefit) in [(0, 0), (5, 100), (-3, i64::MAX)] {
            let verdict = Checker::evaluate_sample(&mut checker, &SimResult::new(ticks, benefit));
            assert_eq!(verdict, Verdict::NotSatisfied);
        }

        assert!(!checker.is_negated());
        assert_eq!(checker.min_tick(), Some(0));
        assert_eq!(checker.max_tick(), Some(0));
    }
}
