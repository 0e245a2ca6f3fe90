//! Reflection of `serde_json` values.
//!
//! [`Value`] is a dynamic type: its kind is decided by the variant it holds.
//!
//! | variant | kind |
//! |---|---|
//! | `Object` | [`Map`] |
//! | `Array` | [`List`](crate::ops::List) (`Vec<Value>`) |
//! | `Null` | [`Pointer`], never set |
//! | `Bool`, `Number`, `String` | opaque |

use alloc::boxed::Box;
use core::fmt;

use serde_json::Value;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, MapInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Map, MapIter, Pointer, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

type JsonMap = serde_json::Map<alloc::string::String, Value>;

// -----------------------------------------------------------------------------
// Value

impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for Value {
    fn reflect_kind(&self) -> ReflectKind {
        match self {
            Value::Object(_) => ReflectKind::Map,
            Value::Array(_) => ReflectKind::List,
            Value::Null => ReflectKind::Pointer,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ReflectKind::Opaque,
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Value::Object(map) => ReflectRef::Map(map),
            Value::Array(items) => ReflectRef::List(items),
            Value::Null => ReflectRef::Pointer(self),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ReflectRef::Opaque(self),
        }
    }

    #[inline]
    fn reflect_str(&self) -> Option<&str> {
        self.as_str()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Only `Value::Null` is reported as a pointer.
impl Pointer for Value {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        None
    }
}

// -----------------------------------------------------------------------------
// Map

impl Typed for JsonMap {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Map(MapInfo::new::<Self, alloc::string::String, Value>())
        })
    }
}

impl Reflect for JsonMap {
    impl_reflect_cast_fn!(Map);
}

impl Map for JsonMap {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        JsonMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        JsonMap::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(JsonMap::iter(self).map(|(key, value)| (key.as_str(), value.as_reflect())))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use serde_json::json;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;

    #[test]
    fn kind_follows_the_variant() {
        let kinds = [
            (json!({"a": 1}), ReflectKind::Map),
            (json!([1, 2]), ReflectKind::List),
            (json!(null), ReflectKind::Pointer),
            (json!("a"), ReflectKind::Opaque),
            (json!(1.5), ReflectKind::Opaque),
        ];
        for (value, kind) in kinds {
            assert_eq!(value.reflect_kind(), kind);
            assert_eq!(value.reflect_ref().kind(), kind);
        }
    }

    #[test]
    fn object_entries_are_values() {
        let value = json!({"Struct": {"Array": [1, 2, 3]}});
        let ReflectRef::Map(map) = value.reflect_ref() else {
            panic!("expected a map");
        };
        let inner = map.get("Struct").unwrap();

        assert!(inner.is::<serde_json::Value>());
        assert_eq!(format!("{:?}", inner), r#"{"Array":[1,2,3]}"#);
    }

    #[test]
    fn only_strings_have_text() {
        assert_eq!(json!("{}").reflect_str(), Some("{}"));
        assert_eq!(json!(1).reflect_str(), None);
    }
}
