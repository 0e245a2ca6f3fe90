use core::any::TypeId;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::Pointer;

/// A container for compile-time info of an indirection,
/// such as `Option<T>`, `Box<T>` or `Arc<T>`.
///
/// # Examples
///
/// ```rust
/// use lookup_reflect::info::Typed;
///
/// let info = <Option<Box<u8>> as Typed>::type_info().as_pointer().unwrap();
/// let inner = info.pointee_info().as_pointer().unwrap();
///
/// assert!(inner.pointee_info().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new<TPtr: Pointer, T: Typed + ?Sized>() -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee_id: TypeId::of::<T>(),
            pointee_info: T::type_info,
        }
    }

    /// Returns the [`TypeId`] of the referenced type.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns the [`TypeInfo`] of the referenced type.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
