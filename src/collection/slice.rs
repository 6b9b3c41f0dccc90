//! Edge accessors and fixed-size chunking.

use super::error::ChunkSizeError;

/// Returns a new vector without the first element.
///
/// An empty slice yields an empty vector, not an error.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::drop_first;
///
/// assert_eq!(drop_first(&[1, 2, 3]), vec![2, 3]);
/// assert_eq!(drop_first::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn drop_first<T: Clone>(items: &[T]) -> Vec<T> {
    items
        .split_first()
        .map_or_else(Vec::new, |(_, rest)| rest.to_vec())
}

/// Returns a new vector without the last element.
///
/// An empty slice yields an empty vector, not an error.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::drop_last;
///
/// assert_eq!(drop_last(&[1, 2, 3]), vec![1, 2]);
/// assert_eq!(drop_last::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn drop_last<T: Clone>(items: &[T]) -> Vec<T> {
    items
        .split_last()
        .map_or_else(Vec::new, |(_, rest)| rest.to_vec())
}

/// Returns the first element, or `None` when the slice is empty.
///
/// Absence is an ordinary outcome here, never an error.
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns the last element, or `None` when the slice is empty.
///
/// Absence is an ordinary outcome here, never an error.
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Splits a slice into consecutive chunks of at most `size` elements.
///
/// The last chunk may be shorter. An empty slice yields no chunks.
///
/// # Errors
///
/// Returns [`ChunkSizeError`] when `size` is zero; the chunk size is a
/// required, always-validated parameter.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::partition;
///
/// let chunks = partition(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
///
/// assert!(partition(&[1, 2], 0).is_err());
/// ```
pub fn partition<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkSizeError> {
    if size == 0 {
        return Err(ChunkSizeError);
    }
    Ok(items.chunks(size).map(|chunk| chunk.to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_first_removes_head_only() {
        assert_eq!(drop_first(&["a", "b", "c"]), vec!["b", "c"]);
    }

    #[test]
    fn test_drop_first_on_singleton_and_empty() {
        assert_eq!(drop_first(&[1]), Vec::<i32>::new());
        assert_eq!(drop_first::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_drop_last_removes_tail_only() {
        assert_eq!(drop_last(&["a", "b", "c"]), vec!["a", "b"]);
    }

    #[test]
    fn test_drop_last_on_singleton_and_empty() {
        assert_eq!(drop_last(&[1]), Vec::<i32>::new());
        assert_eq!(drop_last::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_first_and_last_on_populated_slice() {
        let items = [10, 20, 30];
        assert_eq!(first(&items), Some(&10));
        assert_eq!(last(&items), Some(&30));
    }

    #[test]
    fn test_first_and_last_absent_on_empty_slice() {
        let items: [i32; 0] = [];
        assert_eq!(first(&items), None);
        assert_eq!(last(&items), None);
    }

    #[test]
    fn test_partition_exact_and_ragged() {
        assert_eq!(
            partition(&[1, 2, 3, 4], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4]]
        );
        assert_eq!(
            partition(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
    }

    #[test]
    fn test_partition_size_larger_than_input() {
        assert_eq!(partition(&[1, 2], 10).unwrap(), vec![vec![1, 2]]);
    }

    #[test]
    fn test_partition_empty_input_yields_no_chunks() {
        assert_eq!(partition::<i32>(&[], 3).unwrap(), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn test_partition_zero_size_is_an_error() {
        assert_eq!(partition(&[1, 2], 0), Err(ChunkSizeError));
    }
}
