//! Runtime reflection for plain Rust data, and path lookups over it.
//!
//! - [`Reflect`]: the object-safe view of a value (`&dyn Reflect`).
//! - [`info`]: static type information, available without a value.
//! - [`ops`]: per-kind access traits such as [`Struct`](ops::Struct) and [`Map`](ops::Map).
//! - [`impls`]: implementations for std types and `serde_json::Value`.
//! - [`access`]: dotted path lookups with broadcast over collections.
//! - [`derive`]: `#[derive(Reflect)]` for named-field structs.
//!
//! # Examples
//!
//! ```
//! use lookup_reflect::derive::Reflect;
//! use lookup_reflect::access::{Options, ReflectLookup};
//!
//! #[derive(Reflect)]
//! struct Member {
//!     role: String,
//! }
//!
//! #[derive(Reflect)]
//! struct Team {
//!     cast: Vec<Member>,
//! }
//!
//! let team = Team {
//!     cast: vec![
//!         Member { role: "Hannibal".into() },
//!         Member { role: "Murdock".into() },
//!     ],
//! };
//!
//! let roles = team.lookup("cast.role", &Options::default()).unwrap();
//! let roles = roles.as_merged().unwrap().downcast_items::<String>().unwrap();
//! assert_eq!(roles, ["Hannibal", "Murdock"]);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `lookup_reflect::...`, which must also resolve
// inside this crate and its unit tests.
extern crate self as lookup_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use lookup_reflect_derive as derive;
pub use reflection::Reflect;
