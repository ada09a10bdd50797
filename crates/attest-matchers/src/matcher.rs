//! The core matcher capability interface.

use std::marker::PhantomData;

/// A predicate over a candidate value paired with a textual description of
/// what it asserts.
///
/// Matchers are small, self-describing objects; there is no hierarchy beyond
/// this trait. A matcher's predicate must not panic for a well-typed
/// candidate — a panicking predicate is a programming error at the call site
/// and propagates uncaught.
pub trait Matcher<A: ?Sized> {
    /// Evaluate the check against the candidate.
    fn matches(&self, actual: &A) -> bool;

    /// What this matcher requires, e.g. `a value greater than 1`.
    fn describe(&self) -> String;

    /// Check-specific detail about why the candidate failed, e.g. `was 0`.
    fn describe_mismatch(&self, actual: &A) -> String;
}

/// Adapter turning any closure plus a description into a [`Matcher`].
pub struct PredicateMatcher<A: ?Sized, F> {
    description: String,
    predicate: F,
    _actual: PhantomData<fn(&A) -> bool>,
}

/// Build a matcher from a description and a boolean-valued closure.
///
/// ```
/// use attest_matchers::{satisfies, Matcher};
///
/// let even = satisfies("an even number", |n: &i32| n % 2 == 0);
/// assert!(even.matches(&4));
/// assert!(!even.matches(&5));
/// ```
pub fn satisfies<A: ?Sized, F>(description: impl Into<String>, predicate: F) -> PredicateMatcher<A, F>
where
    F: Fn(&A) -> bool,
{
    PredicateMatcher {
        description: description.into(),
        predicate,
        _actual: PhantomData,
    }
}

impl<A: ?Sized, F> Matcher<A> for PredicateMatcher<A, F>
where
    F: Fn(&A) -> bool,
{
    fn matches(&self, actual: &A) -> bool {
        (self.predicate)(actual)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, _actual: &A) -> String {
        format!("the candidate was not {}", self.description)
    }
}
