use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use lookup_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A { id: u32 }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.as_struct().is_some());
/// ```
///
/// # Manually Impl
///
/// [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`] store the
/// leaked `TypeInfo`.
///
/// ```
/// use lookup_reflect::{
///     Reflect,
///     info::{Typed, TypeInfo, OpaqueInfo},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Celsius(f32);
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
/// # impl Reflect for Celsius {
/// #     fn reflect_kind(&self) -> lookup_reflect::info::ReflectKind {
/// #         lookup_reflect::info::ReflectKind::Opaque
/// #     }
/// #     fn reflect_ref(&self) -> lookup_reflect::ops::ReflectRef<'_> {
/// #         lookup_reflect::ops::ReflectRef::Opaque(self)
/// #     }
/// # }
///
/// assert!(Celsius::type_info().type_is::<Celsius>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the concrete type behind `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lookup_reflect::{Reflect, info::DynamicTyped};
    /// let a = Box::new(vec![1_u8]) as Box<dyn Reflect>;
    /// let info = a.as_ref().reflect_type_info();
    /// assert!(info.type_is::<Vec<u8>>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
