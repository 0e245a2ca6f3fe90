use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::Map;

/// A container for compile-time map-like info.
///
/// Keys of reflected maps are always looked up by string, so only the
/// key's [`Type`] is recorded.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lookup_reflect::info::Typed;
///
/// let info = <HashMap<String, u8> as Typed>::type_info().as_map().unwrap();
///
/// assert!(info.key_ty().is::<String>());
/// assert!(info.value_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    value_id: TypeId,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: Map, TKey: ?Sized + 'static, TValue: Typed + ?Sized>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_ty: Type::of::<TKey>(),
            value_id: TypeId::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`Type`] of the keys.
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the [`TypeId`] of the values.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Returns `true` if the value type is `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
