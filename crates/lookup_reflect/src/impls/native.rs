use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

macro_rules! impl_reflect_string {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_str(&self) -> Option<&str> {
                Some(&**self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&**self, f)
            }
        }
    )*};
}

impl_reflect_opaque!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

impl_reflect_string!(String, &'static str, Box<str>, Cow<'static, str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn strings_expose_their_text() {
        let owned = String::from("{}");
        let cow: Cow<'static, str> = Cow::Borrowed("abc");

        assert_eq!(owned.reflect_str(), Some("{}"));
        assert_eq!("x".reflect_str(), Some("x"));
        assert_eq!(cow.reflect_str(), Some("abc"));
        assert_eq!(1_u8.reflect_str(), None);
    }

    #[test]
    fn scalars_are_opaque() {
        assert_eq!(1.5_f64.reflect_kind(), ReflectKind::Opaque);
        assert!(i64::type_info().as_opaque().is_some());
        assert_eq!(format!("{:?}", true.as_reflect()), "true");
        assert_eq!(format!("{:?}", String::from("a").as_reflect()), "\"a\"");
    }
}
