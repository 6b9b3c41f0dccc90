//! # veckit
//!
//! A utility library for Rust providing set-like sequence operations,
//! grouping helpers, binary-search insertion, and JSON payload containers.
//!
//! ## Overview
//!
//! This library collects the small sequence utilities that projects tend to
//! rewrite in every codebase. It includes:
//!
//! - **Collection Operations**: unique, group, batch, index, set algebra
//!   (union, intersection, difference), chunking, and in-place removal and
//!   sorted insertion
//! - **Binary Search**: recursive lookup and insertion-index routines over
//!   slices sorted by a caller-supplied comparator
//! - **Ad Hoc Container**: a thin wrapper for JSON-serializable payloads
//!
//! All operations are synchronous and stateless: pure functions return fresh
//! `Vec`s, and the two mutating operations (`remove`, `insert`) work through
//! an exclusive reference supplied by the caller.
//!
//! ## Feature Flags
//!
//! - `collection`: Collection operations (implies `search`)
//! - `search`: Binary-search lookup and insertion-index routines
//! - `container`: JSON payload container (pulls in `serde_json`)
//! - `serde`: Serde derives for [`collection::Nested`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use veckit::prelude::*;
//!
//! let merged = union(&[1, 2, 3], &[3, 4]);
//! assert_eq!(merged, vec![1, 2, 3, 4]);
//!
//! let mut sorted = vec![1, 3, 5];
//! let position = insert(&mut sorted, 4, |a, b| a.cmp(b));
//! assert_eq!(position, 2);
//! assert_eq!(sorted, vec![1, 3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use veckit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "container")]
pub mod container;
