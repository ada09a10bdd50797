//! Property tests for the growable list invariants.

use attest_collections::{GrowableList, ListError};
use proptest::prelude::*;

proptest! {
    /// After N appends, the list holds exactly the appended values, in append
    /// order, and the first index past the end is out of bounds.
    #[test]
    fn appends_preserve_size_and_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = GrowableList::new();
        for value in &values {
            prop_assert!(list.append(*value));
        }

        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.is_empty(), values.is_empty());

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(index), Ok(value));
        }

        prop_assert_eq!(
            list.get(values.len()),
            Err(ListError::OutOfBounds { index: values.len(), len: values.len() })
        );
    }

    /// `contains` agrees with plain membership over the appended values.
    #[test]
    fn contains_agrees_with_membership(
        values in prop::collection::vec(0i32..16, 0..32),
        probe in 0i32..16,
    ) {
        let mut list = GrowableList::new();
        for value in &values {
            list.append(*value);
        }

        prop_assert_eq!(list.contains(&probe), values.contains(&probe));
    }
}
