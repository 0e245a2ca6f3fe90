use crate::Reflect;

// -----------------------------------------------------------------------------
// List trait

/// A trait used to power [list-like] operations via reflection.
///
/// Implemented for `Vec<T>`, `VecDeque<T>`, `[T; N]` and `Box<[T]>`.
///
/// # Examples
///
/// ```
/// use lookup_reflect::{Reflect, ops::List};
///
/// let foo: &dyn List = &vec![123_u32, 456_u32, 789_u32];
/// assert_eq!(foo.len(), 3);
///
/// let last_field: &dyn Reflect = foo.get(2).unwrap();
/// assert_eq!(last_field.downcast_ref::<u32>(), Some(&789));
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
pub trait List: Reflect {
    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// List iterator

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new [`ListItemIter`].
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
