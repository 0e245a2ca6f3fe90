use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapIter};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_map {
    ($(impl[$($params:tt)*] for $ty:ty => $map:ident;)*) => {$(
        impl<$($params)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<$($params)*> Reflect for $ty {
            impl_reflect_cast_fn!(Map);
        }

        impl<$($params)*> Map for $ty {
            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                $map::get(self, key).map(Reflect::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    $map::iter(self)
                        .map(|(key, value)| (Borrow::<str>::borrow(key), value.as_reflect())),
                )
            }
        }
    )*};
}

type StdHashMap<K, V, S> = std::collections::HashMap<K, V, S>;
type BrownHashMap<K, V, S> = lookup_utils::hash::hashbrown::HashMap<K, V, S>;

impl_reflect_map! {
    impl[
        K: Borrow<str> + Eq + Hash + Send + Sync + 'static,
        V: Reflect + Typed,
        S: BuildHasher + Send + Sync + 'static
    ] for StdHashMap<K, V, S> => StdHashMap;
    impl[
        K: Borrow<str> + Eq + Hash + Send + Sync + 'static,
        V: Reflect + Typed,
        S: BuildHasher + Send + Sync + 'static
    ] for BrownHashMap<K, V, S> => BrownHashMap;
    impl[
        K: Borrow<str> + Ord + Send + Sync + 'static,
        V: Reflect + Typed
    ] for BTreeMap<K, V> => BTreeMap;
}
