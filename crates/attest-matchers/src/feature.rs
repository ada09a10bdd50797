//! Matching a named property extracted from the candidate.

use crate::Matcher;
use std::marker::PhantomData;

/// Matcher that extracts a named feature from the candidate and applies an
/// inner matcher to the extracted value.
///
/// Both descriptions and mismatch details are prefixed with the feature name,
/// so a failure reads e.g. `summary length: length was 0` instead of pointing
/// at the whole candidate.
pub struct FeatureMatcher<A: ?Sized, B, F, M> {
    name: String,
    extract: F,
    inner: M,
    _types: PhantomData<fn(&A) -> B>,
}

/// Build a matcher over a feature of the candidate.
///
/// ```
/// use attest_matchers::{feature, greater_than, Matcher};
///
/// let long_enough = feature("its length", |s: &String| s.len(), greater_than(2));
/// assert!(long_enough.matches(&"java".to_string()));
/// assert!(!long_enough.matches(&"jp".to_string()));
/// ```
pub fn feature<A: ?Sized, B, F, M>(
    name: impl Into<String>,
    extract: F,
    inner: M,
) -> FeatureMatcher<A, B, F, M>
where
    F: Fn(&A) -> B,
    M: Matcher<B>,
{
    FeatureMatcher {
        name: name.into(),
        extract,
        inner,
        _types: PhantomData,
    }
}

impl<A: ?Sized, B, F, M> Matcher<A> for FeatureMatcher<A, B, F, M>
where
    F: Fn(&A) -> B,
    M: Matcher<B>,
{
    fn matches(&self, actual: &A) -> bool {
        self.inner.matches(&(self.extract)(actual))
    }

    fn describe(&self) -> String {
        format!("{}: {}", self.name, self.inner.describe())
    }

    fn describe_mismatch(&self, actual: &A) -> String {
        let extracted = (self.extract)(actual);
        format!("{}: {}", self.name, self.inner.describe_mismatch(&extracted))
    }
}
