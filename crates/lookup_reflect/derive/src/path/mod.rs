//! Paths of the items generated code refers to, kept in one place so a
//! change in the layout of `lookup_reflect` only touches this module.
//!
//! The only special one is the path of `lookup_reflect` itself,
//! see [`lookup_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `lookup_reflect` crate.
///
/// 1. For crates that depend on `lookup_reflect`, `::lookup_reflect` is returned.
/// 2. For crates that depend on `lookup`, `::lookup::reflect` is returned.
/// 3. For other situations, `::lookup_reflect` is returned, which works inside
///    `lookup_reflect` through its `extern crate self` alias.
///
/// This reads the caller's `Cargo.toml`, so the path is passed around
/// rather than resolved again.
pub(crate) fn lookup_reflect() -> syn::Path {
    lookup_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("lookup_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::Reflect
    }
}
