//! Append-only growable list for the Attest toolkit.
//!
//! This crate provides [`GrowableList`], a deliberately minimal ordered
//! container: elements go in at the end, are read back by index, and are
//! never removed. Out-of-bounds reads and unsupported mutations surface as
//! explicit [`ListError`] values instead of panics or silent defaults.
//!
//! # Example
//!
//! ```
//! use attest_collections::GrowableList;
//!
//! let mut list = GrowableList::new();
//! list.append("jp");
//! list.append("java");
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(0), Ok(&"jp"));
//! assert!(list.contains(&"java"));
//! assert!(list.get(2).is_err());
//! ```

mod error;
mod growable;

pub use error::ListError;
pub use growable::GrowableList;
