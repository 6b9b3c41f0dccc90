//! Binary-search routines over comparator-sorted slices.
//!
//! This module provides recursive binary-search primitives for slices kept
//! sorted by a caller-supplied comparator:
//!
//! - [`binary_search`]: Locates an element matching a key over the full slice
//! - [`binary_search_between`]: Same lookup restricted to an inclusive range
//! - [`insertion_index`]: Computes the position at which a new element keeps
//!   the slice sorted
//!
//! The comparator establishes the order: [`Ordering::Less`] means the first
//! argument precedes the second. Lookups report absence with `None` instead
//! of panicking, and the insertion routine places ties after existing equal
//! elements.
//!
//! [`Ordering::Less`]: std::cmp::Ordering::Less
//!
//! # Examples
//!
//! ```rust
//! use veckit::search::{binary_search, insertion_index};
//!
//! let sorted = [1, 3, 5, 7, 9];
//!
//! assert_eq!(binary_search(&sorted, &5, |key, candidate| key.cmp(candidate)), Some(&5));
//! assert_eq!(binary_search(&sorted, &4, |key, candidate| key.cmp(candidate)), None);
//!
//! assert_eq!(insertion_index(&sorted, &4, |a, b| a.cmp(b)), 2);
//! ```

mod bisect;

pub use bisect::{binary_search, binary_search_between, insertion_index};
