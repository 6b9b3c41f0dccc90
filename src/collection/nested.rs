//! Nested sequences and flattening.
//!
//! Dynamically nested input (a sequence whose elements may themselves be
//! sequences, to any depth) is modeled by the explicit recursive enum
//! [`Nested`]. [`flatten`] splices a single level of nesting; [`flatten_deep`]
//! keeps going until only plain items remain.

/// An element of a possibly-nested sequence: either a plain item or a list of
/// further nested elements.
///
/// With the `serde` feature enabled, `Nested` serializes untagged, so a JSON
/// document like `[[1, 2], [3, [4, 5]]]` maps onto `Vec<Nested<i32>>`
/// directly.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::Nested;
///
/// let item: Nested<i32> = Nested::Item(1);
/// assert!(item.is_item());
///
/// let list: Nested<i32> = Nested::List(vec![Nested::Item(2), Nested::Item(3)]);
/// assert!(list.is_list());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A plain item, passed through flattening unchanged.
    Item(T),
    /// A nested list of further elements.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a plain item.
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this is a nested list.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Converts into the item value, consuming the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veckit::collection::Nested;
    ///
    /// assert_eq!(Nested::Item(7).item(), Some(7));
    /// assert_eq!(Nested::<i32>::List(vec![]).item(), None);
    /// ```
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Converts into the nested list, consuming the element.
    #[inline]
    pub fn list(self) -> Option<Vec<Self>> {
        match self {
            Self::Item(_) => None,
            Self::List(elements) => Some(elements),
        }
    }

    /// Returns a reference to the item value if present.
    #[inline]
    pub const fn item_ref(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns a reference to the nested list if present.
    #[inline]
    pub const fn list_ref(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Item(_) => None,
            Self::List(elements) => Some(elements),
        }
    }
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

static_assertions::assert_impl_all!(Nested<i32>: Send, Sync);

/// Splices one level of nesting: lists are replaced by their contents, items
/// pass through unchanged.
///
/// Deeper nesting inside a spliced list survives one call; apply
/// [`flatten_deep`] to remove it entirely.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::{Nested, flatten};
///
/// // [[1, 2], [3, [4, 5]]]
/// let nested = [
///     Nested::List(vec![Nested::Item(1), Nested::Item(2)]),
///     Nested::List(vec![
///         Nested::Item(3),
///         Nested::List(vec![Nested::Item(4), Nested::Item(5)]),
///     ]),
/// ];
///
/// // [1, 2, 3, [4, 5]]
/// assert_eq!(
///     flatten(&nested),
///     vec![
///         Nested::Item(1),
///         Nested::Item(2),
///         Nested::Item(3),
///         Nested::List(vec![Nested::Item(4), Nested::Item(5)]),
///     ],
/// );
/// ```
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(items.len());
    for element in items {
        match element {
            Nested::List(inner) => flattened.extend_from_slice(inner),
            item @ Nested::Item(_) => flattened.push(item.clone()),
        }
    }
    flattened
}

/// Flattens until no nesting remains, returning the plain items in encounter
/// order.
///
/// # Examples
///
/// ```rust
/// use veckit::collection::{Nested, flatten_deep};
///
/// // [[1, 2], [3, [4, 5]]]
/// let nested = [
///     Nested::List(vec![Nested::Item(1), Nested::Item(2)]),
///     Nested::List(vec![
///         Nested::Item(3),
///         Nested::List(vec![Nested::Item(4), Nested::Item(5)]),
///     ]),
/// ];
///
/// assert_eq!(flatten_deep(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_deep<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flattened = Vec::with_capacity(items.len());
    collect_items(items, &mut flattened);
    flattened
}

/// Depth-first item collection behind [`flatten_deep`].
fn collect_items<T: Clone>(items: &[Nested<T>], into: &mut Vec<T>) {
    for element in items {
        match element {
            Nested::Item(value) => into.push(value.clone()),
            Nested::List(inner) => collect_items(inner, into),
        }
    }
}
