//! Error types for the collection operations.
//!
//! This module provides the errors raised when a collection operation's
//! contract is violated: indexing a sequence whose keys collide, or chunking
//! with a zero size. Both are raised synchronously at the offending call and
//! are never recovered internally.

/// Represents an error when two elements map to the same index key.
///
/// This error occurs in [`index_by`](crate::collection::index_by), which
/// requires every element to map to a distinct key. The offending key is
/// captured in its `Debug` rendering.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::DuplicateKeyError;
///
/// let error = DuplicateKeyError {
///     key: "\"alpha\"".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index_by: duplicate key \"alpha\"",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// `Debug` rendering of the key shared by two elements.
    pub key: String,
}

impl std::fmt::Display for DuplicateKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "index_by: duplicate key {}", self.key)
    }
}

impl std::error::Error for DuplicateKeyError {}

/// Represents an error when a chunk size of zero is requested.
///
/// This error occurs in [`partition`](crate::collection::partition), whose
/// chunk size is a required, always-validated parameter.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::ChunkSizeError;
///
/// assert_eq!(
///     format!("{}", ChunkSizeError),
///     "partition: chunk size must be greater than zero",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizeError;

impl std::fmt::Display for ChunkSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "partition: chunk size must be greater than zero")
    }
}

impl std::error::Error for ChunkSizeError {}
