//! Broadcast of a path over the elements of a collection, and the merge of
//! the per-element results.

use alloc::string::ToString;
use alloc::vec::Vec;

use serde_json::Value;

use crate::access::resolve::strip;
use crate::access::structural::resolve_type;
use crate::access::walk::{Node, check_depth, walk};
use crate::access::{LookupError, Merged, Options, Resolved, Segment};
use crate::info::TypeInfo;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Aggregate

/// Walks `path` from every element of `container` and merges the results.
///
/// `container` must be a stripped list or map. The first failing element
/// fails the whole broadcast.
pub(crate) fn aggregate<'a>(
    container: Node<'a>,
    path: &[Segment<'_>],
    options: &Options,
    depth: usize,
) -> Result<Option<Resolved<'a>>, LookupError> {
    check_depth(depth, options)?;

    let info = container.type_info();
    let mut values: Vec<Resolved<'a>> = Vec::new();
    let mut len = 0;

    let mut visit = |element: Node<'a>| -> Result<(), LookupError> {
        len += 1;
        if let Some(value) = walk(element, path, options, depth)? {
            values.push(value);
        }
        Ok(())
    };

    match container {
        Node::Borrowed(value) => match value.reflect_ref() {
            ReflectRef::List(list) => list.iter().try_for_each(|v| visit(Node::Borrowed(v)))?,
            ReflectRef::Map(map) => map.iter().try_for_each(|(_, v)| visit(Node::Borrowed(v)))?,
            _ => {}
        },
        Node::Owned(Value::Array(items)) => items
            .into_iter()
            .try_for_each(|v| visit(Node::Owned(v)))?,
        Node::Owned(Value::Object(entries)) => entries
            .into_iter()
            .try_for_each(|(_, v)| visit(Node::Owned(v)))?,
        _ => {}
    }

    if len == 0 {
        return empty(info, path).map(Some);
    }

    log::debug!(
        "broadcast `{}` over {len} elements, {} results",
        path[0],
        values.len(),
    );

    Ok(merge(values))
}

/// The typed, empty result of a broadcast over an empty collection.
fn empty<'a>(
    info: Option<&'static TypeInfo>,
    path: &[Segment<'_>],
) -> Result<Resolved<'a>, LookupError> {
    match info.and_then(|info| resolve_type(info, path)) {
        Some(item_info) => {
            log::debug!("broadcast `{}` over an empty {}", path[0], item_info.ty());
            Ok(Resolved::Merged(Merged::new(Vec::new(), Some(item_info))))
        }
        None => Err(LookupError::KeyNotFound {
            key: path[0].name.to_string(),
        }),
    }
}

// -----------------------------------------------------------------------------
// Merge

fn is_aggregable(value: &Resolved<'_>) -> bool {
    match value {
        Resolved::Merged(_) => true,
        _ => value
            .as_reflect()
            .is_some_and(|value| value.reflect_kind().is_aggregable()),
    }
}

/// Merges per-element results into one sequence.
///
/// If the first value is a collection every value is flattened one level,
/// otherwise each value becomes one item. Returns `None` when `values` is
/// empty.
pub(crate) fn merge<'a>(values: Vec<Resolved<'a>>) -> Option<Resolved<'a>> {
    let sample = values.first()?;
    let flatten = is_aggregable(sample);

    let mut item_info = match sample {
        Resolved::Merged(merged) => merged.item_info(),
        _ if flatten => sample.type_info().and_then(TypeInfo::element_info),
        _ => sample.type_info(),
    };

    let mut items: Vec<Resolved<'a>> = Vec::new();
    for value in values {
        if flatten {
            flatten_into(&mut items, value);
        } else {
            items.push(value);
        }
    }

    if item_info.is_none() {
        item_info = items.first().and_then(Resolved::type_info);
    }

    Some(Resolved::Merged(Merged::new(items, item_info)))
}

fn flatten_into<'a>(items: &mut Vec<Resolved<'a>>, value: Resolved<'a>) {
    match value {
        Resolved::Merged(merged) => items.extend(merged.into_items()),
        Resolved::Borrowed(value) => match value.reflect_ref() {
            ReflectRef::List(list) => {
                items.extend(list.iter().filter_map(strip).map(Resolved::Borrowed));
            }
            ReflectRef::Map(map) => {
                let values = map.iter().filter_map(|(_, v)| strip(v));
                items.extend(values.map(Resolved::Borrowed));
            }
            _ => items.push(Resolved::Borrowed(value)),
        },
        Resolved::Expanded(Value::Array(values)) => {
            let values = values.into_iter().filter(|v| !v.is_null());
            items.extend(values.map(Resolved::Expanded));
        }
        Resolved::Expanded(Value::Object(entries)) => {
            let values = entries.into_iter().map(|(_, v)| v).filter(|v| !v.is_null());
            items.extend(values.map(Resolved::Expanded));
        }
        value => items.push(value),
    }
}
