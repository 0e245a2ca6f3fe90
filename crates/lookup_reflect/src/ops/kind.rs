use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Map, Pointer, Struct};

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to a kind of
/// type. A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
///
/// # Examples
///
/// ```
/// use lookup_reflect::{Reflect, ops::ReflectRef};
///
/// let value = vec![1_u8, 2, 3];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 3),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this variant.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the inner value as a plain `dyn Reflect`.
    #[inline]
    pub fn as_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(v) => v,
            Self::List(v) => v,
            Self::Map(v) => v,
            Self::Pointer(v) => v,
            Self::Opaque(v) => v,
        }
    }
}
