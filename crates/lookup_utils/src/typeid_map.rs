use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// Used by the type information cells of generic types, where one `static`
/// is shared by every instantiation and each instantiation needs its own slot.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use lookup_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::<&str>::new();
/// map.get_or_insert(TypeId::of::<u8>(), || "u8");
///
/// assert_eq!(map.get_type::<u8>(), Some(&"u8"));
/// assert!(map.get_type::<u16>().is_none());
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Gets a mutable reference to the value of `type_id`,
    /// inserting the result of `f` if the key is not present.
    ///
    /// The closure `f` is only called if the key is not present.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value corresponding to the type id.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value corresponding to the type.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for TypeIdMap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TypeIdMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}
