//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: a [`TypeId`] plus the type's name.
//!
//! - [`TypeInfo`]: an enum describing the shape of a type, the inner is one of following:
//!     - [`StructInfo`]: named-field structs, fields in declaration order.
//!     - [`ListInfo`]: sequences (e.g. `Vec<T>`, `[T; N]`), with the item type.
//!     - [`MapInfo`]: string-keyed maps, with the key and value types.
//!     - [`PointerInfo`]: indirections (e.g. `Option<T>`, `Box<T>`), with the pointee type.
//!     - [`DynamicInfo`]: types whose shape is only known from a value
//!       (e.g. `serde_json::Value`, `dyn Reflect`).
//!     - [`OpaqueInfo`]: scalars and other types without visible structure.
//!
//! - [`NamedField`]: a struct field name and its type.
//!
//! - [`Typed`]: static access to a type's `TypeInfo`.
//! - [`DynamicTyped`]: dynamic dispatch for `Typed`.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) of this type.
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the [`TypeId`](core::any::TypeId) of this type.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns the full name of this type.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::{DynamicInfo, OpaqueInfo};
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, Type, TypeInfo};
pub use typed::{DynamicTyped, Typed};
