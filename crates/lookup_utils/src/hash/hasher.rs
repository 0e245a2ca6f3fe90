//! Deterministic hash states.
//!
//! - [`FixedHashState`]: `foldhash` with a compile-time seed, so hash maps
//!   built from the same keys iterate in the same order on every run.
//! - [`NoOpHashState`]: passes an already well-distributed `u64` straight
//!   through, used for [`TypeId`](core::any::TypeId) keys.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const SEED: FixedState = FixedState::with_seed(0x6C6F_6F6B_7570_5F31);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] whose output only depends on the hashed input.
///
/// Map lookups over reflected string-keyed maps iterate their entries when
/// falling back to case-insensitive matching; a fixed seed keeps that
/// iteration order stable between runs.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use lookup_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("Cast");
/// let b = FixedHashState.hash_one("Cast");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher produced by [`NoOpHashState`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Folds arbitrary bytes so `write_u64(n)` and `write(&n.to_le_bytes())` agree.
        for &byte in bytes.iter().rev() {
            self.hash = (self.hash << 8) | u64::from(byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// A [`BuildHasher`] that stores the last written `u64` as the hash.
///
/// Only suitable for keys that are already hashes.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use lookup_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// hasher.write_u64(42);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
