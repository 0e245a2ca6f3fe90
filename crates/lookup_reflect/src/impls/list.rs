use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_list_base {
    (impl[$($params:tt)*] for $ty:ty) => {
        impl<$($params)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<$($params)*> Reflect for $ty {
            impl_reflect_cast_fn!(List);
        }
    };
}

// Contiguous storage, read through `AsRef<[T]>`.
macro_rules! impl_reflect_slice_list {
    ($(impl[$($params:tt)*] for $ty:ty;)*) => {$(
        impl_list_base!(impl[$($params)*] for $ty);

        impl<$($params)*> List for $ty {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <Self as AsRef<[T]>>::as_ref(self).get(index).map(Reflect::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <Self as AsRef<[T]>>::as_ref(self).len()
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }
    )*};
}

impl_reflect_slice_list! {
    impl[T: Reflect + Typed] for Vec<T>;
    impl[T: Reflect + Typed] for Box<[T]>;
    impl[T: Reflect + Typed, const N: usize] for [T; N];
}

impl_list_base!(impl[T: Reflect + Typed] for VecDeque<T>);

impl<T: Reflect + Typed> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}
