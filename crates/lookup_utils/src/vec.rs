//! Re-exports [`fastvec`]'s containers.
//!
//! Path segments and per-element aggregation buffers are usually a handful
//! of items, so they are collected on the stack first.

pub use fastvec::{FastVec, fast_vec};
