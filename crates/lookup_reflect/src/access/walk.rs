//! The segment-by-segment driver.

use alloc::string::ToString;

use serde_json::Value;

use crate::Reflect;
use crate::access::aggregate::aggregate;
use crate::access::expand::expand_json;
use crate::access::resolve::{resolve_segment, strip};
use crate::access::{LookupError, Options, Resolved, Segment};
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Node

/// The current value of a walk.
pub(crate) enum Node<'a> {
    /// An unset pointer was reached.
    Absent,
    Borrowed(&'a dyn Reflect),
    /// Data produced by JSON expansion, or found inside it.
    Owned(Value),
}

impl<'a> Node<'a> {
    fn strip(self) -> Self {
        match self {
            Self::Borrowed(value) => strip(value).map_or(Self::Absent, Self::Borrowed),
            Self::Owned(Value::Null) => Self::Absent,
            node => node,
        }
    }

    fn get(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Absent => None,
            Self::Borrowed(value) => Some(*value),
            Self::Owned(value) => Some(value),
        }
    }

    pub(crate) fn type_info(&self) -> Option<&'static TypeInfo> {
        self.get().map(|value| value.reflect_type_info())
    }

    fn is_aggregable(&self) -> bool {
        self.get()
            .is_some_and(|value| value.reflect_kind().is_aggregable())
    }

    fn step(&self, segment: &Segment<'_>, options: &Options) -> Result<Self, LookupError> {
        match self {
            Self::Absent => Err(LookupError::KeyNotFound {
                key: segment.name.to_string(),
            }),
            Self::Borrowed(value) => Ok(resolve_segment(*value, segment, options)?
                .map_or(Self::Absent, Self::Borrowed)),
            // Children of owned JSON are JSON as well.
            Self::Owned(value) => Ok(resolve_segment(value, segment, options)?
                .and_then(|found| found.downcast_ref::<Value>())
                .map_or(Self::Absent, |found| Self::Owned(found.clone()))),
        }
    }

    fn into_resolved(self) -> Option<Resolved<'a>> {
        match self {
            Self::Absent => None,
            Self::Borrowed(value) => Some(Resolved::Borrowed(value)),
            Self::Owned(value) => Some(Resolved::Expanded(value)),
        }
    }
}

// -----------------------------------------------------------------------------
// Walk

#[inline]
pub(crate) fn check_depth(depth: usize, options: &Options) -> Result<(), LookupError> {
    if depth > options.max_depth {
        return Err(LookupError::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }
    Ok(())
}

/// Applies `path` to `node`.
///
/// When a segment fails on a list or map, the rest of the path, the failed
/// segment included, is broadcast over its elements. An out-of-range index
/// is returned as is. `Ok(None)` is an absent
/// result.
pub(crate) fn walk<'a>(
    mut node: Node<'a>,
    path: &[Segment<'_>],
    options: &Options,
    mut depth: usize,
) -> Result<Option<Resolved<'a>>, LookupError> {
    check_depth(depth, options)?;

    for (i, segment) in path.iter().enumerate() {
        node = node.strip();

        if options.expand_string_as_json
            && let Some(object) = node.get().and_then(expand_json)
        {
            depth += 1;
            check_depth(depth, options)?;
            node = Node::Owned(object);
        }

        log::trace!("resolving `{segment}` at depth {depth}");

        match node.step(segment, options) {
            Ok(next) => node = next,
            // The name matched, no element can do better.
            Err(err @ LookupError::IndexOutOfRange { .. }) => return Err(err),
            Err(_) if node.is_aggregable() => {
                return aggregate(node, &path[i..], options, depth + 1);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(node.into_resolved())
}

/// Runs a parsed path from the root value.
pub(crate) fn run<'a>(
    value: &'a dyn Reflect,
    path: &[Segment<'_>],
    options: &Options,
) -> Result<Resolved<'a>, LookupError> {
    walk(Node::Borrowed(value), path, options, 0)?.ok_or_else(|| LookupError::KeyNotFound {
        key: path
            .last()
            .map(|segment| segment.name.to_string())
            .unwrap_or_default(),
    })
}
