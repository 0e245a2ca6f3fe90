use alloc::boxed::Box;

use lookup_utils::hash::HashMap;

use crate::info::{NamedField, Type, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// # Examples
///
/// ```rust
/// use lookup_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     Val: f64,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("Val"), Some(1));
/// assert!(info.field_names().eq(["val", "Val"]));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the [`NamedField`] whose name is exactly `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(self.index_of(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the field named exactly `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
