use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait used to power [struct-like] operations via reflection.
///
/// This trait uses the [`Reflect`] trait to allow implementors to have their
/// fields accessed by name or by declaration index.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for
/// structs with named fields.
///
/// # Examples
///
/// ```
/// use lookup_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field = foo.field("bar").unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
pub trait Struct: Reflect {
    /// Returns the field named exactly `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field at `index`, in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field at `index`, in declaration order.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

// -----------------------------------------------------------------------------
// Field iterator

/// An iterator over the fields of a [`Struct`], in declaration order.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Struct;

    struct Secret;

    #[derive(Reflect)]
    struct Session {
        user: String,
        #[reflect(ignore)]
        _token: Secret,
        r#type: u8,
    }

    #[derive(Reflect)]
    struct Pair<T> {
        left: T,
        rest: Vec<T>,
    }

    #[derive(Reflect)]
    struct Marker;

    fn session() -> Session {
        Session {
            user: "amy".into(),
            _token: Secret,
            r#type: 2,
        }
    }

    #[test]
    fn ignored_fields_are_invisible() {
        let session = session();

        assert_eq!(session.field_len(), 2);
        assert!(session.field("_token").is_none());

        let names: Vec<&str> = session.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["user", "type"]);

        let info = Session::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 2);
        assert!(info.field("_token").is_none());
    }

    #[test]
    fn raw_identifiers_are_unprefixed() {
        let session = session();
        assert_eq!(session.field("type").unwrap().downcast_ref::<u8>(), Some(&2));
        assert_eq!(session.name_at(1), Some("type"));
        assert!(session.field_at(2).is_none());
    }

    #[test]
    fn generic_structs_keep_one_info_per_instance() {
        let pair = Pair {
            left: 1_u8,
            rest: vec![2, 3],
        };
        assert_eq!(pair.field("left").unwrap().downcast_ref::<u8>(), Some(&1));

        let bytes = <Pair<u8>>::type_info().as_struct().unwrap();
        let words = <Pair<String>>::type_info().as_struct().unwrap();
        assert!(bytes.field("rest").unwrap().type_is::<Vec<u8>>());
        assert!(words.field("rest").unwrap().type_is::<Vec<String>>());
    }

    #[test]
    fn unit_structs_are_opaque() {
        let marker: &dyn Reflect = &Marker;
        assert_eq!(marker.reflect_kind(), ReflectKind::Opaque);
        assert!(Marker::type_info().as_opaque().is_some());
        assert_eq!(format!("{marker:?}"), "Marker");
    }
}
