//! [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) helpers,
//! one per composite kind.

use core::fmt;

use crate::ops::{List, Map, Pointer, Struct};

/// Formats a [`Struct`] as `TypeName { field: value, .. }`.
///
/// # Example
///
/// ```
/// use lookup_reflect::{derive::Reflect, Reflect};
///
/// #[derive(Reflect)]
/// struct Actor {
///     name: String,
///     age: u8,
/// }
///
/// let actor = Actor { name: "George Peppard".into(), age: 66 };
/// let text = format!("{:?}", actor.as_reflect());
/// assert_eq!(text, r#"Actor { name: "George Peppard", age: 66 }"#);
/// ```
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_info().ty().short_name());
    for (name, field) in dyn_struct.iter_fields() {
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Formats a [`List`] as `[item, ..]`.
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Formats a [`Map`] as `{key: value, ..}`.
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Formats a [`Pointer`] as its pointee, or `None` when unset.
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(value) => value.reflect_debug(f),
        None => f.write_str("None"),
    }
}
