//! Deduplication, grouping, and indexing by key.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::error::DuplicateKeyError;

/// Returns a new vector retaining the first occurrence of each value.
///
/// Encounter order is preserved. The element acts as its own key, so this is
/// [`unique_by`] with the identity selector.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::unique;
///
/// assert_eq!(unique(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns a new vector retaining the first occurrence per key.
///
/// The selector derives the key used for uniqueness; later elements sharing
/// an already-seen key are dropped. Encounter order is preserved.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `K` - The key type, compared by hash and equality
/// * `F` - The key selector
///
/// # Examples
///
/// ```rust
/// use veckit::collection::unique_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry"];
/// let firsts = unique_by(&words, |word| word.as_bytes()[0]);
/// assert_eq!(firsts, vec!["apple", "banana"]);
/// ```
pub fn unique_by<T, K, F>(items: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|element| seen.insert(selector(element)))
        .cloned()
        .collect()
}

/// Groups all elements by key into a map of vectors.
///
/// Every element lands in exactly one group; duplicate keys are expected and
/// accumulate. Encounter order is preserved within each group (the map itself
/// is unordered).
///
/// # Examples
///
/// ```rust
/// use veckit::collection::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |number| number % 2);
/// assert_eq!(groups[&0], vec![2, 4]);
/// assert_eq!(groups[&1], vec![1, 3, 5]);
/// ```
pub fn group_by<T, K, F>(items: &[T], selector: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for element in items {
        groups.entry(selector(element)).or_default().push(element.clone());
    }
    groups
}

/// Splits a slice into contiguous runs of elements sharing a key.
///
/// Unlike [`group_by`], only adjacent elements are compared: the same key
/// reappearing after a gap starts a fresh run. A slice whose keys are all
/// equal yields a single run; an empty slice yields no runs.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::batch_by;
///
/// let runs = batch_by(&[1, 1, 2, 2, 1], |number| *number);
/// assert_eq!(runs, vec![vec![1, 1], vec![2, 2], vec![1]]);
/// ```
pub fn batch_by<T, K, F>(items: &[T], selector: F) -> Vec<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut runs: Vec<Vec<T>> = Vec::new();
    let mut previous: Option<K> = None;
    for element in items {
        let key = selector(element);
        if previous.as_ref() != Some(&key) {
            runs.push(Vec::new());
        }
        if let Some(run) = runs.last_mut() {
            run.push(element.clone());
        }
        previous = Some(key);
    }
    runs
}

/// Indexes elements by key, requiring every key to be distinct.
///
/// # Errors
///
/// Returns [`DuplicateKeyError`] naming the offending key as soon as two
/// elements map to the same key; no partial map escapes.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::index_by;
///
/// let indexed = index_by(&[(1, "one"), (2, "two")], |entry| entry.0).unwrap();
/// assert_eq!(indexed[&2], (2, "two"));
///
/// let collision = index_by(&[(1, "one"), (1, "uno")], |entry| entry.0);
/// assert_eq!(collision.unwrap_err().key, "1");
/// ```
pub fn index_by<T, K, F>(items: &[T], selector: F) -> Result<HashMap<K, T>, DuplicateKeyError>
where
    T: Clone,
    K: Eq + Hash + Debug,
    F: Fn(&T) -> K,
{
    let mut indexed = HashMap::with_capacity(items.len());
    for element in items {
        let key = selector(element);
        if indexed.contains_key(&key) {
            return Err(DuplicateKeyError {
                key: format!("{key:?}"),
            });
        }
        indexed.insert(key, element.clone());
    }
    Ok(indexed)
}
