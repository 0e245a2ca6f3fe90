//! Containers for static storage of type information.
//!
//! Every [`Typed`](crate::info::Typed) implementation keeps its
//! [`TypeInfo`] in a `static`, built on first use and never freed.
//!
//! - Non-generic types use [`NonGenericTypeInfoCell`], a [`OnceLock`].
//! - A `static` inside a generic function is shared by every instantiation,
//!   so generic types use [`GenericTypeInfoCell`], a [`TypeIdMap`] behind a
//!   [`RwLock`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use lookup_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use lookup_reflect::{derive::Reflect, info::{Typed, TypeInfo, StructInfo, NamedField}};
/// use lookup_reflect::impls::NonGenericTypeInfoCell;
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct A2 {
///     a: u32,
/// }
///
/// impl Typed for A2 {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(
///             StructInfo::new::<A2>(&[NamedField::new::<u32>("a")])
///         ))
///     }
/// }
///
/// let info = A2::type_info().as_struct().unwrap();
/// assert!(info.field("a").unwrap().type_is::<u32>());
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored `TypeInfo`, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use lookup_reflect::{derive::Reflect, Reflect};
/// use lookup_reflect::info::{Typed, TypeInfo, StructInfo, NamedField};
/// use lookup_reflect::impls::GenericTypeInfoCell;
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct A3<T> {
///     inner: T,
/// }
///
/// impl<T: Typed + Reflect> Typed for A3<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Struct(
///             StructInfo::new::<Self>(&[NamedField::new::<T>("inner")])
///         ))
///     }
/// }
///
/// let info = <A3<u64>>::type_info().as_struct().unwrap();
/// assert!(info.field_at(0).unwrap().type_is::<u64>());
/// assert!(<A3<u8>>::type_info().as_struct().unwrap().field_at(0).unwrap().type_is::<u8>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the `TypeInfo` stored for `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match cached {
            Some(info) => info,
            // `f` runs without the lock held, it may reach this cell again.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
