//! String matchers.
//!
//! Case-insensitive variants compare against a pre-lowercased copy of the
//! pattern so the pattern is lowercased once, not on every evaluation. Regex
//! matchers ignore the case-sensitivity flag; case handling belongs in the
//! pattern itself.

use crate::{Matcher, MatcherError};
use regex::Regex;

/// A pattern with a pre-computed lowercase form for case-insensitive matching.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedPattern {
    value: String,
    lower: String,
}

impl CachedPattern {
    fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let lower = value.to_lowercase();
        Self { value, lower }
    }

    fn equals(&self, actual: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            actual == self.value
        } else {
            actual.to_lowercase() == self.lower
        }
    }

    fn contained_in(&self, actual: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            actual.contains(&self.value)
        } else {
            actual.to_lowercase().contains(&self.lower)
        }
    }

    fn starts(&self, actual: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            actual.starts_with(&self.value)
        } else {
            actual.to_lowercase().starts_with(&self.lower)
        }
    }

    fn ends(&self, actual: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            actual.ends_with(&self.value)
        } else {
            actual.to_lowercase().ends_with(&self.lower)
        }
    }
}

#[derive(Debug, Clone)]
enum TextOp {
    Equals(CachedPattern),
    Contains(CachedPattern),
    StartsWith(CachedPattern),
    EndsWith(CachedPattern),
    MatchesPattern(Regex),
}

/// Matcher over string candidates.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    op: TextOp,
    case_sensitive: bool,
}

/// Matches strings equal to `expected`.
pub fn equal_to_text(expected: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::Equals(CachedPattern::new(expected)),
        case_sensitive: true,
    }
}

/// Matches strings containing `substring`.
pub fn contains_text(substring: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::Contains(CachedPattern::new(substring)),
        case_sensitive: true,
    }
}

/// Matches strings starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::StartsWith(CachedPattern::new(prefix)),
        case_sensitive: true,
    }
}

/// Matches strings ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::EndsWith(CachedPattern::new(suffix)),
        case_sensitive: true,
    }
}

/// Matches strings against a regular expression.
///
/// Fails with [`MatcherError::InvalidPattern`] when the pattern does not
/// compile.
pub fn matches_pattern(pattern: &str) -> Result<TextMatcher, MatcherError> {
    Ok(TextMatcher {
        op: TextOp::MatchesPattern(Regex::new(pattern)?),
        case_sensitive: true,
    })
}

impl TextMatcher {
    /// Compare ignoring ASCII/Unicode case. No effect on regex matchers.
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }
}

impl Matcher<str> for TextMatcher {
    fn matches(&self, actual: &str) -> bool {
        match &self.op {
            TextOp::Equals(pattern) => pattern.equals(actual, self.case_sensitive),
            TextOp::Contains(pattern) => pattern.contained_in(actual, self.case_sensitive),
            TextOp::StartsWith(pattern) => pattern.starts(actual, self.case_sensitive),
            TextOp::EndsWith(pattern) => pattern.ends(actual, self.case_sensitive),
            TextOp::MatchesPattern(regex) => regex.is_match(actual),
        }
    }

    fn describe(&self) -> String {
        let base = match &self.op {
            TextOp::Equals(pattern) => format!("a string equal to {:?}", pattern.value),
            TextOp::Contains(pattern) => format!("a string containing {:?}", pattern.value),
            TextOp::StartsWith(pattern) => format!("a string starting with {:?}", pattern.value),
            TextOp::EndsWith(pattern) => format!("a string ending with {:?}", pattern.value),
            TextOp::MatchesPattern(regex) => {
                return format!("a string matching the pattern `{}`", regex.as_str());
            }
        };

        if self.case_sensitive {
            base
        } else {
            format!("{base}, ignoring case")
        }
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        format!("was {actual:?}")
    }
}

impl Matcher<String> for TextMatcher {
    fn matches(&self, actual: &String) -> bool {
        Matcher::<str>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Matcher::<str>::describe(self)
    }

    fn describe_mismatch(&self, actual: &String) -> String {
        Matcher::<str>::describe_mismatch(self, actual)
    }
}
