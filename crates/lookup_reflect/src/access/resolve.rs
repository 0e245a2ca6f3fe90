//! Resolution of a single segment against a single value.

use alloc::string::ToString;

use crate::Reflect;
use crate::access::{LookupError, Options, Segment};
use crate::ops::{Map, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Indirection

/// Follows pointers down to the first non-pointer value.
///
/// Returns `None` when an unset pointer is met.
pub(crate) fn strip(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    loop {
        match value.reflect_ref() {
            ReflectRef::Pointer(ptr) => value = ptr.pointee()?,
            _ => return Some(value),
        }
    }
}

// -----------------------------------------------------------------------------
// Segment

/// Resolves `segment` against `value`.
///
/// `Ok(None)` is an absent value: the segment matched a field or key, but it
/// holds an unset pointer.
pub(crate) fn resolve_segment<'r>(
    value: &'r dyn Reflect,
    segment: &Segment<'_>,
    options: &Options,
) -> Result<Option<&'r dyn Reflect>, LookupError> {
    let not_found = || LookupError::KeyNotFound {
        key: segment.name.to_string(),
    };

    let value = strip(value).ok_or_else(not_found)?;
    let matched = match value.reflect_ref() {
        ReflectRef::Struct(value) => field_by_name(value, &segment.name, options),
        ReflectRef::Map(value) => entry_by_key(value, &segment.name, options),
        _ => None,
    }
    .ok_or_else(not_found)?;

    let matched = strip(matched);
    let Some(index) = segment.index else {
        return Ok(matched);
    };

    let Some(ReflectRef::List(list)) = matched.map(|v| v.reflect_ref()) else {
        return Err(LookupError::InvalidIndexUsage {
            segment: segment.to_string(),
        });
    };

    match list.get(index) {
        Some(item) => Ok(strip(item)),
        None => Err(LookupError::IndexOutOfRange {
            segment: segment.to_string(),
            index,
            len: list.len(),
        }),
    }
}

/// Exact field name first, then the first declared field accepted by a
/// fallback.
fn field_by_name<'r>(
    value: &'r dyn Struct,
    name: &str,
    options: &Options,
) -> Option<&'r dyn Reflect> {
    if let Some(field) = value.field(name) {
        return Some(field);
    }
    if !options.has_fallback() {
        return None;
    }
    value
        .iter_fields()
        .find(|(field, _)| options.names_match(field, name))
        .map(|(_, field)| field)
}

/// Exact key first, then the first key in iteration order accepted by a
/// fallback.
fn entry_by_key<'r>(value: &'r dyn Map, key: &str, options: &Options) -> Option<&'r dyn Reflect> {
    if let Some(entry) = value.get(key) {
        return Some(entry);
    }
    if !options.has_fallback() {
        return None;
    }
    value
        .iter()
        .find(|(candidate, _)| options.names_match(candidate, key))
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{resolve_segment, strip};
    use crate::Reflect;
    use crate::access::{LookupError, Options, Segment};

    fn seg(text: &str) -> Segment<'_> {
        Segment::parse(text).unwrap()
    }

    #[test]
    fn strip_follows_nested_pointers() {
        let value: Option<Box<Option<u8>>> = Some(Box::new(Some(3)));
        let inner = strip(&value).unwrap();
        assert_eq!(inner.downcast_ref::<u8>(), Some(&3));

        let unset: Option<Box<Option<u8>>> = Some(Box::new(None));
        assert!(strip(&unset).is_none());

        let dynamic: Box<dyn Reflect> = Box::new(Some(String::from("x")));
        assert!(strip(&dynamic).unwrap().is::<String>());
    }

    #[test]
    fn map_key_then_index() {
        let mut map: BTreeMap<String, Vec<i32>> = BTreeMap::new();
        map.insert("nums".into(), vec![10, 20]);
        let options = Options::default();

        let found = resolve_segment(&map, &seg("nums[1]"), &options).unwrap();
        assert_eq!(found.unwrap().downcast_ref::<i32>(), Some(&20));

        assert_eq!(
            resolve_segment(&map, &seg("nums[2]"), &options).unwrap_err(),
            LookupError::IndexOutOfRange {
                segment: "nums[2]".to_string(),
                index: 2,
                len: 2,
            },
        );
        assert_eq!(
            resolve_segment(&map, &seg("other"), &options).unwrap_err(),
            LookupError::KeyNotFound {
                key: "other".to_string()
            },
        );
    }

    #[test]
    fn index_requires_a_list() {
        let mut map: BTreeMap<String, Option<Vec<i32>>> = BTreeMap::new();
        map.insert("text".into(), Some(vec![]));
        map.insert("none".into(), None);
        let options = Options::default();

        // Indirection is stripped before indexing.
        assert!(matches!(
            resolve_segment(&map, &seg("text[0]"), &options),
            Err(LookupError::IndexOutOfRange { .. }),
        ));
        assert!(matches!(
            resolve_segment(&map, &seg("none[0]"), &options),
            Err(LookupError::InvalidIndexUsage { .. }),
        ));
        assert!(resolve_segment(&map, &seg("none"), &options).unwrap().is_none());

        let scalar: BTreeMap<String, u8> = BTreeMap::from([("n".into(), 1)]);
        assert!(matches!(
            resolve_segment(&scalar, &seg("n[0]"), &options),
            Err(LookupError::InvalidIndexUsage { .. }),
        ));
    }

    #[test]
    fn scalars_and_lists_never_match() {
        let options = Options::default().with_case_insensitive(true);
        assert!(resolve_segment(&1_u8, &seg("x"), &options).is_err());
        assert!(resolve_segment(&vec![1_u8], &seg("len"), &options).is_err());

        let unset: Option<BTreeMap<String, u8>> = None;
        assert_eq!(
            resolve_segment(&unset, &seg("x"), &options).unwrap_err(),
            LookupError::KeyNotFound {
                key: "x".to_string()
            },
        );
    }

    #[test]
    fn map_case_fallback() {
        let map: BTreeMap<String, u8> = BTreeMap::from([("Key".into(), 1)]);

        let strict = Options::default();
        assert!(resolve_segment(&map, &seg("KEY"), &strict).is_err());

        let folded = Options::default().with_case_insensitive(true);
        let found = resolve_segment(&map, &seg("KEY"), &folded).unwrap();
        assert_eq!(found.unwrap().downcast_ref::<u8>(), Some(&1));
    }
}
