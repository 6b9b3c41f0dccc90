//! Collection operations over slices and vectors.
//!
//! This module provides the set-like and grouping operations of the crate:
//!
//! - [`unique`] / [`unique_by`]: First-occurrence deduplication
//! - [`group_by`]: Global grouping into a key-to-elements map
//! - [`batch_by`]: Adjacent-run batching (contiguous groups only)
//! - [`index_by`]: Unique indexing, failing on key collisions
//! - [`drop_first`] / [`drop_last`] / [`first`] / [`last`]: Edge accessors
//! - [`flatten`] / [`flatten_deep`]: Splicing of [`Nested`] sequences
//! - [`partition`]: Fixed-size chunking
//! - [`difference`] / [`symmetric_difference`] / [`union`] /
//!   [`intersection`] and their `_by` variants: Order-preserving set algebra
//! - [`remove`] / [`insert`]: The two in-place operations
//!
//! # Purity and Ownership
//!
//! Every operation except [`remove`] and [`insert`] is pure: inputs are
//! borrowed slices and results are freshly allocated. The two mutating
//! operations take `&mut Vec<T>` and return a status (`bool`) or position
//! (`usize`); the caller keeps ownership throughout.
//!
//! # Keyed Variants
//!
//! The `_by` variants take a key selector, a closure deriving a comparison
//! key from an element. Uniqueness is global (hash-based) everywhere except
//! [`batch_by`], which only ever compares adjacent keys.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity  |
//! |----------------------------|-------------|
//! | `unique`, `unique_by`      | O(n)        |
//! | `group_by`, `index_by`     | O(n)        |
//! | `batch_by`                 | O(n)        |
//! | `difference`, `union`, ... | O(n + m)    |
//! | `remove`                   | O(n)        |
//! | `insert`                   | O(log n) search + O(n) splice |
//!
//! # Examples
//!
//! ```rust
//! use veckit::collection::{intersection, unique_by, partition};
//!
//! let merged = unique_by(&["ab", "cd", "af"], |text| text.as_bytes()[0]);
//! assert_eq!(merged, vec!["ab", "cd"]);
//!
//! let common = intersection(&[1, 2, 2, 3], &[2, 3, 4]);
//! assert_eq!(common, vec![2, 2, 3]);
//!
//! let chunks = partition(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

mod dedup;
mod error;
mod mutate;
mod nested;
mod sets;
mod slice;

pub use dedup::{batch_by, group_by, index_by, unique, unique_by};
pub use error::{ChunkSizeError, DuplicateKeyError};
pub use mutate::{insert, remove};
pub use nested::{Nested, flatten, flatten_deep};
pub use sets::{
    difference, difference_by, intersection, intersection_by, symmetric_difference,
    symmetric_difference_by, union, union_by,
};
pub use slice::{drop_first, drop_last, first, last, partition};
