//! Length, membership and per-item matchers over sequences.
//!
//! The primary implementations target `[T]`; delegating implementations for
//! `Vec<T>` (and `str`/`String` for the length matcher) keep call sites free
//! of explicit slicing.

use crate::Matcher;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthBound {
    Exactly(usize),
    AtLeast(usize),
}

/// Matcher on the number of elements (or characters) in the candidate.
#[derive(Debug, Clone, Copy)]
pub struct HasLength {
    bound: LengthBound,
}

/// Matches sequences with exactly `expected` elements.
pub fn has_length(expected: usize) -> HasLength {
    HasLength {
        bound: LengthBound::Exactly(expected),
    }
}

/// Matches sequences with at least `min` elements.
pub fn has_length_at_least(min: usize) -> HasLength {
    HasLength {
        bound: LengthBound::AtLeast(min),
    }
}

impl HasLength {
    fn check(&self, len: usize) -> bool {
        match self.bound {
            LengthBound::Exactly(expected) => len == expected,
            LengthBound::AtLeast(min) => len >= min,
        }
    }

    fn expectation(&self) -> String {
        match self.bound {
            LengthBound::Exactly(expected) => format!("length {expected}"),
            LengthBound::AtLeast(min) => format!("length of at least {min}"),
        }
    }
}

impl<T> Matcher<[T]> for HasLength {
    fn matches(&self, actual: &[T]) -> bool {
        self.check(actual.len())
    }

    fn describe(&self) -> String {
        format!("a collection with {}", self.expectation())
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        format!("length was {}", actual.len())
    }
}

impl<T> Matcher<Vec<T>> for HasLength {
    fn matches(&self, actual: &Vec<T>) -> bool {
        self.check(actual.len())
    }

    fn describe(&self) -> String {
        format!("a collection with {}", self.expectation())
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        format!("length was {}", actual.len())
    }
}

impl Matcher<str> for HasLength {
    fn matches(&self, actual: &str) -> bool {
        self.check(actual.chars().count())
    }

    fn describe(&self) -> String {
        format!("a string with {}", self.expectation())
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        format!("length was {}", actual.chars().count())
    }
}

impl Matcher<String> for HasLength {
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

/// Matcher asserting that some element equals an expected value.
#[derive(Debug, Clone)]
pub struct ContainsElement<T> {
    expected: T,
}

/// Matches sequences containing an element equal to `expected`.
pub fn contains_element<T: PartialEq + Debug>(expected: T) -> ContainsElement<T> {
    ContainsElement { expected }
}

impl<T: PartialEq + Debug> Matcher<[T]> for ContainsElement<T> {
    fn matches(&self, actual: &[T]) -> bool {
        actual.iter().any(|item| *item == self.expected)
    }

    fn describe(&self) -> String {
        format!("a collection containing {:?}", self.expected)
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        format!("was {actual:?}")
    }
}

impl<T: PartialEq + Debug> Matcher<Vec<T>> for ContainsElement<T> {
    fn matches(&self, actual: &Vec<T>) -> bool {
        Matcher::<[T]>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Matcher::<[T]>::describe(self)
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        Matcher::<[T]>::describe_mismatch(self, actual)
    }
}

/// Matcher applying an inner matcher to every element.
#[derive(Debug, Clone)]
pub struct EveryItem<M> {
    inner: M,
}

/// Matches sequences in which every element satisfies `inner`.
pub fn every_item<M>(inner: M) -> EveryItem<M> {
    EveryItem { inner }
}

impl<T, M: Matcher<T>> Matcher<[T]> for EveryItem<M> {
    fn matches(&self, actual: &[T]) -> bool {
        actual.iter().all(|item| self.inner.matches(item))
    }

    fn describe(&self) -> String {
        format!("every item is {}", self.inner.describe())
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        for (index, item) in actual.iter().enumerate() {
            if !self.inner.matches(item) {
                return format!("item {index} {}", self.inner.describe_mismatch(item));
            }
        }
        "every item matched".to_string()
    }
}

impl<T, M: Matcher<T>> Matcher<Vec<T>> for EveryItem<M> {
    fn matches(&self, actual: &Vec<T>) -> bool {
        Matcher::<[T]>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Matcher::<[T]>::describe(self)
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        Matcher::<[T]>::describe_mismatch(self, actual)
    }
}

/// Matcher asserting that the candidate holds no elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

/// Matches empty sequences.
pub fn empty() -> IsEmpty {
    IsEmpty
}

impl<T> Matcher<[T]> for IsEmpty {
    fn matches(&self, actual: &[T]) -> bool {
        actual.is_empty()
    }

    fn describe(&self) -> String {
        "an empty collection".to_string()
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        format!("had length {}", actual.len())
    }
}

impl<T> Matcher<Vec<T>> for IsEmpty {
    fn matches(&self, actual: &Vec<T>) -> bool {
        actual.is_empty()
    }

    fn describe(&self) -> String {
        "an empty collection".to_string()
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        format!("had length {}", actual.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::greater_than;

    #[test]
    fn test_has_length() {
        let list = vec![5, 2, 4];

        assert!(has_length(3).matches(&list));
        assert!(!has_length(2).matches(&list));
        assert_eq!(
            Matcher::<Vec<i32>>::describe(&has_length(3)),
            "a collection with length 3"
        );
    }

    #[test]
    fn test_has_length_at_least() {
        let list = vec![7, 5, 12, 16];

        assert!(has_length_at_least(1).matches(&list));
        assert!(has_length_at_least(4).matches(&list));
        assert!(!has_length_at_least(5).matches(&list));

        let empty_list: Vec<i32> = vec![];
        assert!(!has_length_at_least(1).matches(&empty_list));
        assert_eq!(
            Matcher::<Vec<i32>>::describe_mismatch(&has_length_at_least(1), &empty_list),
            "length was 0"
        );
    }

    #[test]
    fn test_has_length_over_strings() {
        assert!(Matcher::<str>::matches(&has_length(2), "jp"));
        assert!(!Matcher::<str>::matches(&has_length(2), "java"));
        // Counted in characters, not bytes.
        assert!(Matcher::<str>::matches(&has_length(4), "café"));
    }

    #[test]
    fn test_contains_element() {
        let list = vec![5, 2, 4];

        assert!(contains_element(2).matches(&list));
        assert!(!contains_element(42).matches(&list));
        assert_eq!(
            Matcher::<Vec<i32>>::describe(&contains_element(42)),
            "a collection containing 42"
        );
        assert_eq!(
            Matcher::<Vec<i32>>::describe_mismatch(&contains_element(42), &list),
            "was [5, 2, 4]"
        );
    }

    #[test]
    fn test_every_item() {
        let list = vec![5, 2, 4];

        assert!(every_item(greater_than(1)).matches(&list));
        assert!(!every_item(greater_than(4)).matches(&list));
        assert_eq!(
            Matcher::<Vec<i32>>::describe(&every_item(greater_than(1))),
            "every item is a value greater than 1"
        );
        assert_eq!(
            Matcher::<Vec<i32>>::describe_mismatch(&every_item(greater_than(4)), &list),
            "item 1 was 2"
        );
    }

    #[test]
    fn test_empty() {
        let none: Vec<i32> = vec![];
        let some = vec![1];

        assert!(empty().matches(&none));
        assert!(!empty().matches(&some));
        assert_eq!(
            Matcher::<Vec<i32>>::describe_mismatch(&empty(), &some),
            "had length 1"
        );
    }
}
