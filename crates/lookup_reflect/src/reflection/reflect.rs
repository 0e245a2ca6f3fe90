use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls;
use crate::info::{DynamicInfo, DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of reflection: a read-only, dynamically typed view of a value.
///
/// A `&dyn Reflect` can be inspected through [`reflect_ref`](Reflect::reflect_ref),
/// which returns one of the kind traits in [`ops`](crate::ops), and
/// downcast back to a concrete type with [`downcast_ref`](#method.downcast_ref).
///
/// # Implementation
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) for structs with named
/// fields. The crate implements it for scalars, strings, std collections,
/// `Option`, `Box`, `Arc` and `serde_json::Value`.
///
/// # Examples
///
/// ```
/// use lookup_reflect::{Reflect, info::ReflectKind};
///
/// let value: &dyn Reflect = &Some(String::from("Murdock"));
///
/// assert_eq!(value.reflect_kind(), ReflectKind::Pointer);
/// assert!(value.is::<Option<String>>());
/// ```
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Moves this value into a `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of "kinds" of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns the text of string-like values.
    ///
    /// Used to expand strings holding JSON objects during lookups.
    #[inline]
    fn reflect_str(&self) -> Option<&str> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// Composite kinds print their reflected content; opaque types print
    /// their type name unless they override this method.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => {
                write!(f, "Opaque({})", self.reflect_type_info().type_name())
            }
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_reflect::Reflect;
    ///
    /// let value: &dyn Reflect = &123_i32;
    /// assert_eq!(value.downcast_ref::<i32>(), Some(&123));
    /// assert!(value.downcast_ref::<u32>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: impls::NonGenericTypeInfoCell = impls::NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
