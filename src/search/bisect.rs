//! Recursive bisection over an inclusive `[start, end]` index range.

use std::cmp::Ordering;

/// Searches a comparator-sorted slice for an element matching `key`.
///
/// The comparator receives the key first and a candidate element second, and
/// must be consistent with the order the slice is sorted in. The first exact
/// match encountered by the bisection is returned; which of several equal
/// elements that is depends on how the range halves, so callers needing a
/// specific occurrence should disambiguate through the key itself.
///
/// Returns `None` when the slice is empty or no element matches.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `K` - The key type the comparator understands
/// * `C` - The comparator, `(key, candidate)` to [`Ordering`]
///
/// # Examples
///
/// ```rust
/// use veckit::search::binary_search;
///
/// let sorted = [1, 3, 5, 7, 9];
/// let comparator = |key: &i32, candidate: &i32| key.cmp(candidate);
///
/// assert_eq!(binary_search(&sorted, &5, comparator), Some(&5));
/// assert_eq!(binary_search(&sorted, &4, comparator), None);
/// assert_eq!(binary_search::<i32, _, _>(&[], &4, comparator), None);
/// ```
pub fn binary_search<'a, T, K, C>(items: &'a [T], key: &K, comparator: C) -> Option<&'a T>
where
    C: Fn(&K, &T) -> Ordering,
{
    if items.is_empty() {
        return None;
    }
    bisect(items, key, &comparator, 0, items.len() - 1)
}

/// Searches within the inclusive index range `[start, end]` of a sorted slice.
///
/// Behaves exactly like [`binary_search`] restricted to the given bounds.
/// Degenerate bounds (an empty slice, `start > end`, or `end` past the last
/// index) report `None` rather than panicking.
///
/// # Examples
///
/// ```rust
/// use veckit::search::binary_search_between;
///
/// let sorted = [1, 3, 5, 7, 9];
/// let comparator = |key: &i32, candidate: &i32| key.cmp(candidate);
///
/// // 1 lies outside [1, 3], so the bounded lookup misses it.
/// assert_eq!(binary_search_between(&sorted, &1, comparator, 1, 3), None);
/// assert_eq!(binary_search_between(&sorted, &7, comparator, 1, 3), Some(&7));
/// assert_eq!(binary_search_between(&sorted, &7, comparator, 3, 1), None);
/// ```
pub fn binary_search_between<'a, T, K, C>(
    items: &'a [T],
    key: &K,
    comparator: C,
    start: usize,
    end: usize,
) -> Option<&'a T>
where
    C: Fn(&K, &T) -> Ordering,
{
    if start > end || end >= items.len() {
        return None;
    }
    bisect(items, key, &comparator, start, end)
}

/// Computes the index at which `item` keeps the slice sorted.
///
/// The slice is assumed already sorted ascending per the comparator; with an
/// unsorted slice the returned index is still in bounds but carries no
/// ordering meaning. Elements comparing equal to `item` are passed over, so
/// the new element lands after existing equal ones.
///
/// The fast paths mirror the common insertion patterns: an empty slice or an
/// item not less than the current last element appends, an item less than the
/// current first element prepends. Everything in between is found by
/// bisection.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `C` - The comparator, `(new item, existing element)` to [`Ordering`]
///
/// # Examples
///
/// ```rust
/// use veckit::search::insertion_index;
///
/// let sorted = [1, 3, 5];
/// let comparator = |a: &i32, b: &i32| a.cmp(b);
///
/// assert_eq!(insertion_index(&sorted, &0, comparator), 0);
/// assert_eq!(insertion_index(&sorted, &4, comparator), 2);
/// assert_eq!(insertion_index(&sorted, &6, comparator), 3);
/// // Ties land after the existing equal element.
/// assert_eq!(insertion_index(&sorted, &3, comparator), 2);
/// ```
pub fn insertion_index<T, C>(items: &[T], item: &T, comparator: C) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    let Some(tail) = items.last() else {
        return 0;
    };
    if comparator(item, tail) != Ordering::Less {
        return items.len();
    }
    if comparator(item, &items[0]) == Ordering::Less {
        return 0;
    }
    bisect_boundary(items, item, &comparator, 0, items.len() - 1)
}

/// Recursive lookup step over the inclusive range `[start, end]`.
///
/// When two or fewer candidates remain after an unequal pivot, the final
/// element of the range is checked directly; this keeps odd- and even-length
/// ranges aligned without running the midpoint past the boundary.
fn bisect<'a, T, K, C>(
    items: &'a [T],
    key: &K,
    comparator: &C,
    start: usize,
    end: usize,
) -> Option<&'a T>
where
    C: Fn(&K, &T) -> Ordering,
{
    let pivot = usize::midpoint(start, end);
    let candidate = &items[pivot];
    match comparator(key, candidate) {
        Ordering::Equal => Some(candidate),
        _ if end - start <= 1 => {
            let boundary = &items[end];
            (comparator(key, boundary) == Ordering::Equal).then_some(boundary)
        }
        Ordering::Greater => bisect(items, key, comparator, pivot, end),
        Ordering::Less => bisect(items, key, comparator, start, pivot),
    }
}

/// Recursive boundary step: narrows `[start, end]` until the two indices are
/// adjacent, keeping the invariant that `item` is not less than `items[start]`
/// and less than `items[end]`. Equal comparisons continue rightward.
fn bisect_boundary<T, C>(items: &[T], item: &T, comparator: &C, start: usize, end: usize) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    if end - start <= 1 {
        return end;
    }
    let pivot = usize::midpoint(start, end);
    if comparator(item, &items[pivot]) == Ordering::Less {
        bisect_boundary(items, item, comparator, start, pivot)
    } else {
        bisect_boundary(items, item, comparator, pivot, end)
    }
}
