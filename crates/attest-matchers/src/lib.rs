//! Composable value matchers with aggregated mismatch reporting.
//!
//! A [`Matcher`] pairs a boolean check over a candidate value with a
//! human-readable description of what it asserts. The
//! [`MatcherCombinator`] chains several matchers with `and`, evaluates all
//! of them against one candidate without stopping at the first failure, and
//! renders a multi-reason [`MismatchReport`] naming every violated check.
//!
//! # Module Structure
//!
//! - `matcher` - The core [`Matcher`] trait and the closure adapter
//! - `text` - String matchers (equals, contains, prefix/suffix, regex)
//! - `value` - Equality and ordering matchers over any comparable type
//! - `sequence` - Length, membership and per-item matchers over slices
//! - `feature` - Matching a named property extracted from the candidate
//! - `logical` - `not` and `any_of`
//! - `combinator` - The aggregating AND-combinator
//! - `report` - Structured mismatch reports
//!
//! # Example
//!
//! ```
//! use attest_matchers::{contains_element, has_length_at_least, MatcherCombinator};
//!
//! let mut checks: MatcherCombinator<Vec<i32>> =
//!     MatcherCombinator::start_with(has_length_at_least(1)).and(contains_element(42));
//!
//! let candidate: Vec<i32> = vec![];
//! assert!(!checks.matches(&candidate));
//!
//! let report = checks.mismatch_report(&candidate);
//! assert_eq!(report.failures(), 2);
//! println!("{report}");
//! ```

mod combinator;
mod error;
mod feature;
mod logical;
mod matcher;
mod report;
mod sequence;
mod text;
mod value;

pub use combinator::MatcherCombinator;
pub use error::MatcherError;
pub use feature::{feature, FeatureMatcher};
pub use logical::{any_of, not, AnyOf, Not};
pub use matcher::{satisfies, Matcher, PredicateMatcher};
pub use report::{MismatchEntry, MismatchReport};
pub use sequence::{
    contains_element, empty, every_item, has_length, has_length_at_least, ContainsElement,
    EveryItem, HasLength, IsEmpty,
};
pub use text::{contains_text, ends_with, equal_to_text, matches_pattern, starts_with, TextMatcher};
pub use value::{at_least, at_most, equal_to, greater_than, less_than, EqualTo, OrderedMatcher};
