//! Equality and ordering matchers over any comparable type.

use crate::Matcher;
use std::fmt::Debug;

/// Matcher asserting value equality against an expected value.
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    expected: T,
}

/// Matches values equal to `expected` under `PartialEq`.
pub fn equal_to<T: PartialEq + Debug>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

impl<T: PartialEq + Debug> Matcher<T> for EqualTo<T> {
    fn matches(&self, actual: &T) -> bool {
        *actual == self.expected
    }

    fn describe(&self) -> String {
        format!("a value equal to {:?}", self.expected)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("was {actual:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderOp {
    GreaterThan,
    LessThan,
    AtLeast,
    AtMost,
}

impl OrderOp {
    fn phrase(self) -> &'static str {
        match self {
            OrderOp::GreaterThan => "greater than",
            OrderOp::LessThan => "less than",
            OrderOp::AtLeast => "at least",
            OrderOp::AtMost => "at most",
        }
    }
}

/// Matcher comparing the candidate against a bound under `PartialOrd`.
#[derive(Debug, Clone)]
pub struct OrderedMatcher<T> {
    op: OrderOp,
    bound: T,
}

/// Matches values strictly greater than `bound`.
pub fn greater_than<T: PartialOrd + Debug>(bound: T) -> OrderedMatcher<T> {
    OrderedMatcher {
        op: OrderOp::GreaterThan,
        bound,
    }
}

/// Matches values strictly less than `bound`.
pub fn less_than<T: PartialOrd + Debug>(bound: T) -> OrderedMatcher<T> {
    OrderedMatcher {
        op: OrderOp::LessThan,
        bound,
    }
}

/// Matches values greater than or equal to `bound`.
pub fn at_least<T: PartialOrd + Debug>(bound: T) -> OrderedMatcher<T> {
    OrderedMatcher {
        op: OrderOp::AtLeast,
        bound,
    }
}

/// Matches values less than or equal to `bound`.
pub fn at_most<T: PartialOrd + Debug>(bound: T) -> OrderedMatcher<T> {
    OrderedMatcher {
        op: OrderOp::AtMost,
        bound,
    }
}

impl<T: PartialOrd + Debug> Matcher<T> for OrderedMatcher<T> {
    fn matches(&self, actual: &T) -> bool {
        match self.op {
            OrderOp::GreaterThan => *actual > self.bound,
            OrderOp::LessThan => *actual < self.bound,
            OrderOp::AtLeast => *actual >= self.bound,
            OrderOp::AtMost => *actual <= self.bound,
        }
    }

    fn describe(&self) -> String {
        format!("a value {} {:?}", self.op.phrase(), self.bound)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("was {actual:?}")
    }
}
