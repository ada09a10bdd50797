//! The growable, append-only list.

use crate::ListError;
use serde::Serialize;

/// An ordered, append-only container that resizes its backing storage as
/// elements are added.
///
/// The backing storage is an exact-fit boxed slice: every [`append`] allocates
/// a slice one slot longer, moves the existing elements across in order, and
/// places the new element in the final slot. Observable behavior (ordering,
/// indexing, length) is the whole contract; the growth strategy is not.
///
/// Removal, in-place replacement and iteration are not part of the contract.
/// The mutating variants return [`ListError::Unsupported`] rather than
/// silently doing nothing.
///
/// Clones are independent value snapshots: appending to a list never affects
/// a clone taken earlier.
///
/// [`append`]: GrowableList::append
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GrowableList<E> {
    slots: Box<[E]>,
}

impl<E> GrowableList<E> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { slots: Box::new([]) }
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of elements currently held. Grows by exactly one per
    /// [`append`](GrowableList::append); nothing shrinks it.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Add an element at the end.
    ///
    /// Always succeeds and returns `true`; duplicates are accepted.
    pub fn append(&mut self, element: E) -> bool {
        let old = std::mem::take(&mut self.slots);
        let mut grown = Vec::with_capacity(old.len() + 1);
        grown.extend(old.into_vec());
        grown.push(element);
        self.slots = grown.into_boxed_slice();
        true
    }

    /// Read the element at `index`.
    ///
    /// Fails with [`ListError::OutOfBounds`] when `index` is outside
    /// `[0, len)`, including on the empty list.
    pub fn get(&self, index: usize) -> Result<&E, ListError> {
        self.slots.get(index).ok_or(ListError::OutOfBounds {
            index,
            len: self.slots.len(),
        })
    }

    /// Removal is outside the list's contract.
    pub fn remove(&mut self, _index: usize) -> Result<E, ListError> {
        Err(ListError::Unsupported("remove"))
    }

    /// In-place replacement is outside the list's contract.
    pub fn set(&mut self, _index: usize, _element: E) -> Result<E, ListError> {
        Err(ListError::Unsupported("set"))
    }

    /// Positional insertion is outside the list's contract.
    pub fn insert_at(&mut self, _index: usize, _element: E) -> Result<(), ListError> {
        Err(ListError::Unsupported("insert_at"))
    }
}

impl<E: PartialEq> GrowableList<E> {
    /// Whether some stored element equals `value` under value equality.
    ///
    /// Scans in storage order and stops at the first hit.
    pub fn contains(&self, value: &E) -> bool {
        self.slots.iter().any(|stored| stored == value)
    }
}

impl<E> Default for GrowableList<E> {
    fn default() -> Self {
        Self::new()
    }
}
