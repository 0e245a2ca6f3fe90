//! Provide reflection implementations for foreign types, and the helpers
//! used to write them.
//!
//! ## Menu
//!
//! - [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`]: static storage
//!   for [`Typed::type_info`](crate::info::Typed::type_info).
//! - [`struct_debug`], [`list_debug`], [`map_debug`], [`pointer_debug`]:
//!   [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) helpers.
//!
//! Covered types:
//!
//! - Opaque: `bool`, `char`, integers, floats, `()`, `String`, `&'static str`,
//!   `Box<str>`, `Cow<'static, str>`.
//! - List: `Vec<T>`, `VecDeque<T>`, `[T; N]`, `Box<[T]>`.
//! - Map: `std::collections::HashMap`, `BTreeMap`, `hashbrown::HashMap`,
//!   `serde_json::Map`, for keys that borrow as `str`.
//! - Pointer: `Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Reflect>`.
//! - Dynamic: `serde_json::Value`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;
mod json;
mod list;
mod map;
mod native;
mod pointer;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use debug::{list_debug, map_debug, pointer_debug, struct_debug};
