//! Type-only resolution, used to type the result of a broadcast over an
//! empty collection.

use crate::access::Segment;
use crate::info::TypeInfo;

/// Returns the type `path` would produce on a value of type `info`.
///
/// Field names are matched exactly; case folding and match functions only
/// apply to values.
pub(crate) fn resolve_type(
    info: &'static TypeInfo,
    path: &[Segment<'_>],
) -> Option<&'static TypeInfo> {
    let Some((head, rest)) = path.split_first() else {
        return Some(info);
    };

    match info {
        TypeInfo::List(_) | TypeInfo::Map(_) => {
            let element = info.element_info()?;
            if head.index.is_some() {
                resolve_type(element, rest)
            } else {
                resolve_type(element, path)
            }
        }
        TypeInfo::Pointer(ptr) => resolve_type(ptr.pointee_info(), path),
        TypeInfo::Dynamic(_) => Some(info),
        TypeInfo::Struct(info) => {
            let field = info.field(&head.name)?.type_info();
            if head.index.is_none() {
                return resolve_type(field, rest);
            }
            match strip_type(field) {
                TypeInfo::List(list) => resolve_type(list.item_info(), rest),
                dynamic @ TypeInfo::Dynamic(_) => Some(dynamic),
                _ => None,
            }
        }
        TypeInfo::Opaque(_) => None,
    }
}

fn strip_type(mut info: &'static TypeInfo) -> &'static TypeInfo {
    while let TypeInfo::Pointer(ptr) = info {
        info = ptr.pointee_info();
    }
    info
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::resolve_type;
    use crate::Reflect;
    use crate::access::Path;
    use crate::derive::Reflect;
    use crate::info::{TypeInfo, Typed};

    #[derive(Reflect)]
    struct Member {
        role: String,
        aliases: Option<Vec<String>>,
        extra: Box<dyn Reflect>,
    }

    #[derive(Reflect)]
    struct Team {
        cast: Vec<Member>,
        tags: BTreeMap<String, u8>,
    }

    fn resolve<T: Typed>(path: &str) -> Option<&'static TypeInfo> {
        let path = Path::parse(path, ".").unwrap();
        resolve_type(T::type_info(), path.segments())
    }

    #[test]
    fn broadcast_through_sequences() {
        assert!(resolve::<Vec<Team>>("cast.role").unwrap().type_is::<String>());
        assert!(resolve::<Vec<Vec<Team>>>("tags").unwrap().type_is::<BTreeMap<String, u8>>());
        assert!(resolve::<Team>("cast[0].role").unwrap().type_is::<String>());
        assert!(resolve::<Team>("cast.role").unwrap().type_is::<String>());
        assert!(resolve::<Option<Box<Team>>>("tags").is_some());
    }

    #[test]
    fn indexed_fields_continue_on_items() {
        assert!(resolve::<Member>("aliases[3]").unwrap().type_is::<String>());
        assert!(resolve::<Member>("role[0]").is_none());
    }

    #[test]
    fn dynamic_types_are_terminal() {
        let info = resolve::<Member>("extra.anything.else").unwrap();
        assert!(matches!(info, TypeInfo::Dynamic(_)));
        assert_eq!(info.ty_id(), TypeId::of::<dyn Reflect>());
        assert!(resolve::<serde_json::Value>("a.b").unwrap().type_is::<serde_json::Value>());
    }

    #[test]
    fn names_match_exactly() {
        assert!(resolve::<Team>("Cast.role").is_none());
        assert!(resolve::<Team>("cast.ROLE").is_none());
        assert!(resolve::<Team>("tags.x.y").is_none());
        assert!(resolve::<u8>("x").is_none());
    }
}
