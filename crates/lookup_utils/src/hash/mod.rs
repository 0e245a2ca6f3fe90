//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] that uses [`FixedHashState`] by default.
///
/// Iteration order only depends on the inserted keys, so two maps built
/// from the same data iterate identically across runs.
///
/// # Examples
///
/// ```
/// use lookup_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
