use crate::Reflect;

/// A trait used to see through indirections via reflection.
///
/// Implemented for `Option<T>`, `Box<T>`, `Arc<T>` and `Box<dyn Reflect>`.
/// `serde_json::Value::Null` is also a pointer, one that is never set.
///
/// # Examples
///
/// ```
/// use lookup_reflect::ops::Pointer;
///
/// let set: Option<u8> = Some(3);
/// let unset: Option<u8> = None;
///
/// assert_eq!(set.pointee().unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(unset.pointee().is_none());
/// ```
pub trait Pointer: Reflect {
    /// Returns the referenced value, or `None` if the indirection is unset.
    fn pointee(&self) -> Option<&dyn Reflect>;
}
