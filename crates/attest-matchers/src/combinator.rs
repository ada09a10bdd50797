//! The aggregating AND-combinator.

use crate::report::{MismatchEntry, MismatchReport};
use crate::Matcher;

/// Chains several matchers and evaluates all of them against one candidate,
/// collecting every failure rather than stopping at the first.
///
/// Built fluently: [`start_with`](MatcherCombinator::start_with) registers
/// the first check, [`and`](MatcherCombinator::and) each further one. Checks
/// are evaluated in registration order and the failed-check list always
/// reflects the most recent [`matches`](MatcherCombinator::matches) call;
/// re-evaluating fully replaces it.
///
/// An empty combinator (only reachable through `Default`) matches every
/// candidate: a conjunction over zero constraints holds vacuously.
pub struct MatcherCombinator<A: ?Sized> {
    matchers: Vec<Box<dyn Matcher<A>>>,
    failed: Vec<usize>,
}

impl<A: ?Sized> MatcherCombinator<A> {
    /// Create a combinator with a single registered check.
    pub fn start_with(matcher: impl Matcher<A> + 'static) -> Self {
        Self {
            matchers: vec![Box::new(matcher)],
            failed: Vec::new(),
        }
    }

    /// Register an additional check. Evaluates nothing.
    pub fn and(mut self, matcher: impl Matcher<A> + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Number of registered checks.
    pub fn checks(&self) -> usize {
        self.matchers.len()
    }

    /// Evaluate every registered check against the candidate, in
    /// registration order and without short-circuiting, so the mismatch
    /// report can name every violation.
    ///
    /// Returns `true` iff no check failed.
    pub fn matches(&mut self, candidate: &A) -> bool {
        self.failed.clear();
        for (index, matcher) in self.matchers.iter().enumerate() {
            if !matcher.matches(candidate) {
                self.failed.push(index);
            }
        }

        tracing::trace!(
            checks = self.matchers.len(),
            failed = self.failed.len(),
            "combinator evaluated"
        );

        self.failed.is_empty()
    }

    /// Positions (registration order) of the checks that failed the most
    /// recent evaluation. Empty before any evaluation.
    pub fn failed_checks(&self) -> &[usize] {
        &self.failed
    }

    /// Render what the combinator as a whole requires: every check's
    /// description, joined with an ` and` connective, one per line.
    pub fn describe(&self) -> String {
        self.matchers
            .iter()
            .map(|m| m.describe())
            .collect::<Vec<_>>()
            .join(" and\n")
    }

    /// Build the structured report for the most recent evaluation.
    ///
    /// Empty (and [`is_match`](MismatchReport::is_match)) when the last
    /// evaluation passed or none has happened yet.
    pub fn mismatch_report(&self, candidate: &A) -> MismatchReport {
        let mut report = MismatchReport::new();
        report.checks_run = self.matchers.len();

        for &index in &self.failed {
            let matcher = &self.matchers[index];
            report.add_entry(MismatchEntry::new(
                matcher.describe(),
                matcher.describe_mismatch(candidate),
            ));
        }

        report
    }

    /// Render the failures of the most recent evaluation, one
    /// `Expected: <description> but <detail>` line per failed check.
    pub fn describe_mismatch(&self, candidate: &A) -> String {
        self.mismatch_report(candidate).to_string()
    }
}

impl<A: ?Sized> Default for MatcherCombinator<A> {
    fn default() -> Self {
        Self {
            matchers: Vec::new(),
            failed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::satisfies;
    use crate::value::{greater_than, less_than};

    #[test]
    fn test_all_checks_pass() {
        let mut checks = MatcherCombinator::start_with(greater_than(0)).and(less_than(10));

        assert!(checks.matches(&5));
        assert!(checks.failed_checks().is_empty());
        assert_eq!(checks.describe_mismatch(&5), "");
    }

    #[test]
    fn test_only_the_failing_check_is_recorded() {
        // c1 and c3 pass, c2 fails: the failed list holds exactly c2.
        let mut checks = MatcherCombinator::start_with(greater_than(0))
            .and(greater_than(100))
            .and(less_than(50));

        assert!(!checks.matches(&7));
        assert_eq!(checks.failed_checks(), &[1]);

        let report = checks.mismatch_report(&7);
        assert_eq!(report.failures(), 1);
        assert_eq!(report.checks_run, 3);
        assert_eq!(report.entries[0].expectation, "a value greater than 100");
    }

    #[test]
    fn test_every_check_is_evaluated_after_a_failure() {
        let mut checks = MatcherCombinator::start_with(greater_than(100)).and(greater_than(200));

        assert!(!checks.matches(&7));
        // Non-short-circuiting: both failures are present.
        assert_eq!(checks.failed_checks(), &[0, 1]);
    }

    #[test]
    fn test_reevaluation_replaces_the_failed_list() {
        let mut checks = MatcherCombinator::start_with(greater_than(0)).and(less_than(10));

        assert!(!checks.matches(&20));
        assert_eq!(checks.failed_checks(), &[1]);

        assert!(!checks.matches(&-1));
        assert_eq!(checks.failed_checks(), &[0]);

        assert!(checks.matches(&5));
        assert!(checks.failed_checks().is_empty());
    }

    #[test]
    fn test_describe_joins_with_and_connective() {
        let checks = MatcherCombinator::<i32>::start_with(greater_than(0)).and(less_than(10));

        assert_eq!(
            checks.describe(),
            "a value greater than 0 and\na value less than 10"
        );
    }

    #[test]
    fn test_describe_mismatch_lists_every_violation() {
        let mut checks = MatcherCombinator::start_with(greater_than(100))
            .and(satisfies("an even number", |n: &i32| n % 2 == 0));

        assert!(!checks.matches(&7));
        assert_eq!(
            checks.describe_mismatch(&7),
            "Expected: a value greater than 100 but was 7\n\
             Expected: an even number but the candidate was not an even number"
        );
    }

    #[test]
    fn test_empty_combinator_matches_vacuously() {
        let mut checks = MatcherCombinator::<i32>::default();

        assert_eq!(checks.checks(), 0);
        assert!(checks.matches(&7));
        assert!(checks.mismatch_report(&7).is_match());
    }

    #[test]
    fn test_mismatch_report_before_any_evaluation_is_neutral() {
        let checks = MatcherCombinator::<i32>::start_with(greater_than(100));

        assert!(checks.mismatch_report(&7).is_match());
        assert_eq!(checks.describe_mismatch(&7), "");
    }
}
