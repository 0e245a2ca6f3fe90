use alloc::vec::Vec;
use core::fmt;
use core::slice;

use serde_json::Value;

use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Resolved

/// The value reached by a successful lookup.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use lookup_reflect::access::{Options, ReflectLookup, Resolved};
///
/// let mut map = BTreeMap::new();
/// map.insert("answer".to_string(), 42_u32);
///
/// let found = map.lookup("answer", &Options::default()).unwrap();
/// assert!(matches!(found, Resolved::Borrowed(_)));
/// assert_eq!(found.downcast_ref::<u32>(), Some(&42));
/// ```
pub enum Resolved<'a> {
    /// A value inside the caller's data.
    Borrowed(&'a dyn Reflect),
    /// A value found inside a string that was expanded as JSON.
    Expanded(Value),
    /// The flattened results of a lookup broadcast over a collection.
    Merged(Merged<'a>),
}

impl<'a> Resolved<'a> {
    /// Returns the single value, or `None` for a merged sequence.
    #[inline]
    pub fn as_reflect(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Borrowed(value) => Some(*value),
            Self::Expanded(value) => Some(value),
            Self::Merged(_) => None,
        }
    }

    /// Downcasts the single value to `T`.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_reflect()?.downcast_ref::<T>()
    }

    /// Returns the merged sequence, or `None` for a single value.
    #[inline]
    pub fn as_merged(&self) -> Option<&Merged<'a>> {
        match self {
            Self::Merged(merged) => Some(merged),
            _ => None,
        }
    }

    /// Returns `true` if the lookup was broadcast over a collection.
    #[inline]
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }

    /// Returns the type information of the single value.
    pub(crate) fn type_info(&self) -> Option<&'static TypeInfo> {
        self.as_reflect().map(|value| value.reflect_type_info())
    }
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed(value) => fmt::Debug::fmt(*value, f),
            Self::Expanded(value) => fmt::Display::fmt(value, f),
            Self::Merged(merged) => fmt::Debug::fmt(merged, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Merged

/// A flat sequence of lookup results.
///
/// Nested results are flattened one level when the first result is a
/// collection. Otherwise every result is one item, so a later broadcast stays
/// a merged item of its own. The item type is known even for an empty
/// sequence whenever it can be derived from type information.
///
/// # Examples
///
/// ```
/// use lookup_reflect::derive::Reflect;
/// use lookup_reflect::access::{Options, ReflectLookup};
///
/// #[derive(Reflect)]
/// struct Record {
///     field: String,
/// }
///
/// let outer: Vec<Vec<Record>> = vec![vec![]];
///
/// let found = outer.lookup("field", &Options::default()).unwrap();
/// let merged = found.as_merged().unwrap();
/// assert!(merged.is_empty());
/// assert!(merged.item_info().unwrap().type_is::<String>());
/// ```
pub struct Merged<'a> {
    items: Vec<Resolved<'a>>,
    item_info: Option<&'static TypeInfo>,
}

impl<'a> Merged<'a> {
    #[inline]
    pub(crate) const fn new(items: Vec<Resolved<'a>>, item_info: Option<&'static TypeInfo>) -> Self {
        Self { items, item_info }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Resolved<'a>> {
        self.items.iter()
    }

    /// Returns the type information of the items, when it is known.
    #[inline]
    pub fn item_info(&self) -> Option<&'static TypeInfo> {
        self.item_info
    }

    /// Downcasts every item to `T`, or returns `None` if any item is not a `T`.
    pub fn downcast_items<T: Reflect>(&self) -> Option<Vec<&T>> {
        self.items.iter().map(Resolved::downcast_ref::<T>).collect()
    }

    pub(crate) fn into_items(self) -> Vec<Resolved<'a>> {
        self.items
    }
}

impl<'a, 'r> IntoIterator for &'r Merged<'a> {
    type Item = &'r Resolved<'a>;
    type IntoIter = slice::Iter<'r, Resolved<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Debug for Merged<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
