//! Logical matchers: `not` and `any_of`.
//!
//! AND-composition with per-check failure reporting lives in
//! [`MatcherCombinator`](crate::MatcherCombinator); it is not duplicated here.

use crate::Matcher;

/// Matcher negating an inner matcher.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

/// Matches when the inner matcher does not.
pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for Not<M> {
    fn matches(&self, actual: &A) -> bool {
        !self.inner.matches(actual)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, _actual: &A) -> String {
        format!("unexpectedly matched {}", self.inner.describe())
    }
}

/// Matcher accepting candidates that satisfy at least one alternative.
pub struct AnyOf<A: ?Sized> {
    alternatives: Vec<Box<dyn Matcher<A>>>,
}

/// Matches when any of the alternatives matches.
pub fn any_of<A: ?Sized>(alternatives: Vec<Box<dyn Matcher<A>>>) -> AnyOf<A> {
    AnyOf { alternatives }
}

impl<A: ?Sized> Matcher<A> for AnyOf<A> {
    fn matches(&self, actual: &A) -> bool {
        self.alternatives.iter().any(|m| m.matches(actual))
    }

    fn describe(&self) -> String {
        self.alternatives
            .iter()
            .map(|m| m.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }

    fn describe_mismatch(&self, _actual: &A) -> String {
        "none of the alternatives matched".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{contains_text, equal_to_text};
    use crate::value::greater_than;

    #[test]
    fn test_not() {
        let matcher = not(greater_than(10));

        assert!(matcher.matches(&5));
        assert!(!matcher.matches(&11));
        assert_eq!(matcher.describe(), "not a value greater than 10");
        assert_eq!(
            matcher.describe_mismatch(&11),
            "unexpectedly matched a value greater than 10"
        );
    }

    #[test]
    fn test_any_of() {
        let matcher: AnyOf<str> = any_of(vec![
            Box::new(equal_to_text("jp")),
            Box::new(contains_text("java")),
        ]);

        assert!(matcher.matches("jp"));
        assert!(matcher.matches("core java"));
        assert!(!matcher.matches("go"));
        assert_eq!(
            matcher.describe(),
            "a string equal to \"jp\" or a string containing \"java\""
        );
    }

    #[test]
    fn test_nested_not_any_of() {
        // NOT (jp OR go) matches anything except those two.
        let matcher = not(any_of::<str>(vec![
            Box::new(equal_to_text("jp")),
            Box::new(equal_to_text("go")),
        ]));

        assert!(!matcher.matches("jp"));
        assert!(!matcher.matches("go"));
        assert!(matcher.matches("java"));
    }
}
