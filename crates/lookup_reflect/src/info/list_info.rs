use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};
use crate::ops::List;

/// A container for compile-time list-like info.
///
/// # Examples
///
/// ```rust
/// # use core::any::TypeId;
/// use lookup_reflect::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
///
/// assert_eq!(info.item_id(), TypeId::of::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<TList: List, TItem: Typed + ?Sized>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`TypeId`] of list items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
