use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicInfo, ListInfo, MapInfo, OpaqueInfo, PointerInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Each kind corresponds to one access trait in [`ops`](crate::ops),
/// and is obtained via [`Reflect::reflect_kind`] or [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Map,
    Pointer,
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for sequences and maps, the kinds a path segment
    /// can be broadcast over.
    #[inline]
    pub const fn is_aggregable(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's name.
///
/// # Examples
///
/// ```
/// # use core::any::TypeId;
/// use lookup_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.name(), "alloc::string::String");
/// assert_eq!(ty.short_name(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: fn() -> &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full name, as given by [`core::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// Returns the name without the module path of the outermost type.
    ///
    /// Generic arguments are kept as they are.
    pub fn short_name(&self) -> &'static str {
        let name = self.name();
        let head = name.find('<').unwrap_or(name.len());
        match name[..head].rfind("::") {
            Some(index) => &name[index + 2..],
            None => name,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained through [`Typed::type_info`] when the type is known, or
/// [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
///
/// The lookup engine walks `TypeInfo` alone to give an empty broadcast
/// result its element type, so every variant that has inner types exposes
/// them here.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Dynamic(DynamicInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full name of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the [`ReflectKind`] values of this type report,
    /// or `None` for [`TypeInfo::Dynamic`] whose kind depends on the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), Some(ReflectKind::Opaque));
    /// assert_eq!(<Vec<i32>>::type_info().kind(), Some(ReflectKind::List));
    /// assert_eq!(serde_json::Value::type_info().kind(), None);
    /// ```
    pub const fn kind(&self) -> Option<ReflectKind> {
        match self {
            Self::Struct(_) => Some(ReflectKind::Struct),
            Self::List(_) => Some(ReflectKind::List),
            Self::Map(_) => Some(ReflectKind::Map),
            Self::Pointer(_) => Some(ReflectKind::Pointer),
            Self::Dynamic(_) => None,
            Self::Opaque(_) => Some(ReflectKind::Opaque),
        }
    }

    /// Returns the item type of a list or the value type of a map.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use lookup_reflect::info::Typed;
    ///
    /// let info = <BTreeMap<String, Vec<u8>>>::type_info();
    /// assert!(info.element_info().unwrap().type_is::<Vec<u8>>());
    /// assert!(u8::type_info().element_info().is_none());
    /// ```
    pub fn element_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::List(info) => Some(info.item_info()),
            Self::Map(info) => Some(info.value_info()),
            _ => None,
        }
    }
}
