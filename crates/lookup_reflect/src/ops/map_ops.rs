use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map trait

/// A trait used to power [map-like] operations via reflection.
///
/// Keys are read and matched as strings. Implemented for std and
/// `hashbrown` hash maps, `BTreeMap` and `serde_json::Map`, whose key
/// type borrows as `str`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use lookup_reflect::{Reflect, ops::Map};
///
/// let mut map = BTreeMap::new();
/// map.insert("id".to_string(), 1_u32);
///
/// let dyn_map: &dyn Map = &map;
/// assert_eq!(dyn_map.get("id").unwrap().downcast_ref::<u32>(), Some(&1));
/// assert!(dyn_map.get("ID").is_none());
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns the value stored under exactly `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(key, value)` in the map's own order.
    fn iter(&self) -> MapIter<'_>;
}

/// An iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a>;
