//! Shared containers for the `lookup` workspace.
//!
//! - [`hash`]: fixed-seed hashing and hash containers, based on `foldhash` and `hashbrown`.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
//! - [`vec`]: small-vector containers re-exported from `fastvec`.
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;
pub mod vec;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
