//! Provide interfaces for reading reflected data.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Reflect`], each one the read access
//! of one [`ReflectKind`]:
//!
//! - [`Struct`]: named fields in declaration order (e.g. `A { .. }`).
//! - [`List`]: positional items (e.g. `Vec<i32>`, `[i32; 4]`).
//! - [`Map`]: values keyed by string (e.g. `HashMap<String, i32>`).
//! - [`Pointer`]: an indirection that may be unset (e.g. `Option<T>`, `Box<T>`).
//!
//! [`ReflectRef`] is the closed enumeration handed out by
//! [`Reflect::reflect_ref`]; scalars are `ReflectRef::Opaque`.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;

pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
