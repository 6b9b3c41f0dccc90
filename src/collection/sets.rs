//! Order-preserving set algebra over slices.
//!
//! Each operation exists in two forms: the plain form, where the element acts
//! as its own key (`T: Eq + Hash`), and a `_by` form taking a key selector.
//! Membership checks are hash-based, so every operation runs in O(n + m).
//!
//! Ordering rules are uniform: results keep the order of the first operand,
//! then (where applicable) the order of the second. Duplicates inside the
//! first operand are never collapsed; the second operand only ever
//! contributes the first occurrence of a not-yet-seen key.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the elements of `a` whose value has no match in `b`.
///
/// Order of `a` is preserved and duplicates in `a` are retained.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 2, 3], &[2, 4]), vec![1, 3]);
/// ```
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let excluded: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|element| !excluded.contains(*element))
        .cloned()
        .collect()
}

/// Returns the elements of `a` whose key has no match in `b`.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::difference_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "dos")];
/// assert_eq!(difference_by(&a, &b, |entry| entry.0), vec![(1, "one")]);
/// ```
pub fn difference_by<T, K, F>(a: &[T], b: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let excluded: HashSet<K> = b.iter().map(&selector).collect();
    a.iter()
        .filter(|element| !excluded.contains(&selector(element)))
        .cloned()
        .collect()
}

/// Returns the elements present in exactly one of `a` and `b`.
///
/// Equivalent to `union(difference(a, b), difference(b, a))`: all of (a − b)
/// first, then (b − a), deduplicated by value across the concatenation.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::symmetric_difference;
///
/// assert_eq!(symmetric_difference(&[1, 2, 3], &[3, 4]), vec![1, 2, 4]);
/// ```
pub fn symmetric_difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    union(&difference(a, b), &difference(b, a))
}

/// Returns the elements whose key is present in exactly one of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::symmetric_difference_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "dos"), (3, "tres")];
/// let exclusive = symmetric_difference_by(&a, &b, |entry| entry.0);
/// assert_eq!(exclusive, vec![(1, "one"), (3, "tres")]);
/// ```
pub fn symmetric_difference_by<T, K, F>(a: &[T], b: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    union_by(
        &difference_by(a, b, &selector),
        &difference_by(b, a, &selector),
        &selector,
    )
}

/// Returns all of `a`, followed by the elements of `b` whose value is still
/// unseen.
///
/// The first-seen element wins on collision: duplicates already inside `a`
/// are retained as-is, while `b` contributes only the first occurrence of
/// each value absent from everything before it.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::union;
///
/// assert_eq!(union(&[1, 2, 1], &[2, 3, 3]), vec![1, 2, 1, 3]);
/// ```
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<&T> = a.iter().collect();
    let mut merged = a.to_vec();
    for element in b {
        if seen.insert(element) {
            merged.push(element.clone());
        }
    }
    merged
}

/// Returns all of `a`, followed by the elements of `b` whose key is still
/// unseen.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::union_by;
///
/// let a = [(1, "one")];
/// let b = [(1, "uno"), (2, "dos")];
/// assert_eq!(union_by(&a, &b, |entry| entry.0), vec![(1, "one"), (2, "dos")]);
/// ```
pub fn union_by<T, K, F>(a: &[T], b: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = a.iter().map(&selector).collect();
    let mut merged = a.to_vec();
    for element in b {
        if seen.insert(selector(element)) {
            merged.push(element.clone());
        }
    }
    merged
}

/// Returns the elements of `a` whose value matches some element of `b`.
///
/// Order of `a` is preserved and duplicates in `a` are retained.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::intersection;
///
/// assert_eq!(intersection(&[1, 2, 2, 3], &[2, 3, 4]), vec![2, 2, 3]);
/// ```
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let allowed: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|element| allowed.contains(*element))
        .cloned()
        .collect()
}

/// Returns the elements of `a` whose key matches some element of `b`.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::intersection_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "dos"), (3, "tres")];
/// assert_eq!(intersection_by(&a, &b, |entry| entry.0), vec![(2, "two")]);
/// ```
pub fn intersection_by<T, K, F>(a: &[T], b: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let allowed: HashSet<K> = b.iter().map(&selector).collect();
    a.iter()
        .filter(|element| allowed.contains(&selector(element)))
        .cloned()
        .collect()
}
