//! `#[derive(Reflect)]` for `lookup_reflect`.
//!
//! Use it through `lookup_reflect::derive::Reflect`, or `lookup::reflect::derive::Reflect`
//! from the facade crate.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Unit structs (`struct T;`) are treated as `Opaque`. Tuple structs,
/// enums and unions are rejected.
///
/// Generic type parameters used by fields must implement `Reflect + Typed`.
///
/// ## Disabling `Typed`
///
/// `#[reflect(Typed = false)]` skips the `Typed` implementation so it can be
/// written by hand, for example to build the `TypeInfo` differently.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Foo { /* ... */ }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Ignoring fields
///
/// `#[reflect(ignore)]` hides a field from reflection completely: it is not
/// part of the type information, is not counted by `field_len`, and no path
/// lookup can reach it. Its type does not need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Session {
///     user: String,
///     #[reflect(ignore)]
///     token: Secret,
/// }
/// ```
///
/// This attribute can only be used on fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::impl_reflect(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
