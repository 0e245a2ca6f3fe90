use crate::Reflect;
use crate::info::{Type, impl_type_fn};

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for compile-time info of types without visible structure,
/// such as numbers and strings.
///
/// # Examples
///
/// ```rust
/// use lookup_reflect::info::Typed;
///
/// let info = String::type_info().as_opaque().unwrap();
/// assert!(info.type_is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: Reflect + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

// -----------------------------------------------------------------------------
// DynamicInfo

/// A container for compile-time info of types whose shape is decided by
/// the value, such as `serde_json::Value` or `dyn Reflect`.
///
/// Type-only resolution stops at such a type.
///
/// # Examples
///
/// ```rust
/// use lookup_reflect::info::Typed;
///
/// let info = serde_json::Value::type_info().as_dynamic().unwrap();
/// assert!(info.type_is::<serde_json::Value>());
/// ```
#[derive(Clone, Debug)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    impl_type_fn!(ty);

    /// Creates a new [`DynamicInfo`].
    #[inline]
    pub const fn new<T: Reflect + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
