use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_pointer {
    ($(impl[$($params:tt)*] for $ty:ty => |$this:ident| $pointee:expr;)*) => {$(
        impl<$($params)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
            }
        }

        impl<$($params)*> Reflect for $ty {
            impl_reflect_cast_fn!(Pointer);
        }

        impl<$($params)*> Pointer for $ty {
            #[inline]
            fn pointee(&self) -> Option<&dyn Reflect> {
                let $this = self;
                $pointee
            }
        }
    )*};
}

impl_reflect_pointer! {
    impl[T: Reflect + Typed] for Option<T> => |this| this.as_ref().map(Reflect::as_reflect);
    impl[T: Reflect + Typed] for Box<T> => |this| Some(Reflect::as_reflect(&**this));
    impl[T: Reflect + Typed] for Arc<T> => |this| Some(Reflect::as_reflect(&**this));
}

impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Pointer(PointerInfo::new::<Self, dyn Reflect>()))
    }
}

impl Reflect for Box<dyn Reflect> {
    impl_reflect_cast_fn!(Pointer);
}

impl Pointer for Box<dyn Reflect> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Pointer;

    #[test]
    fn pointees_are_reachable() {
        let boxed = Box::new(1_u8);
        let shared = Arc::new(2_u8);
        let erased: Box<dyn Reflect> = Box::new(3_u8);

        assert_eq!(boxed.pointee().unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(shared.pointee().unwrap().downcast_ref::<u8>(), Some(&2));
        assert_eq!(Pointer::pointee(&erased).unwrap().downcast_ref::<u8>(), Some(&3));
        assert!(Pointer::pointee(&None::<u8>).is_none());
    }

    #[test]
    fn erased_box_points_to_dynamic_type() {
        let info = <Box<dyn Reflect>>::type_info().as_pointer().unwrap();
        assert!(info.pointee_info().as_dynamic().is_some());
    }

    #[test]
    fn debug_sees_through_pointers() {
        let value: Option<Box<String>> = Some(Box::new(String::from("x")));
        assert_eq!(format!("{:?}", value.as_reflect()), "\"x\"");
        assert_eq!(format!("{:?}", None::<u8>.as_reflect()), "None");
    }
}
