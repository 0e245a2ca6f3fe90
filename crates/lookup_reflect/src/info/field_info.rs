use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use lookup_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty_id: TypeId,
    // `TypeInfo` is created on first access; recursive types would
    // otherwise initialize their own cell while holding it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
