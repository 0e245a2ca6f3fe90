// -----------------------------------------------------------------------------
// Modules

mod opaque_kind;
mod struct_kind;

mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use opaque_kind::impl_opaque;
use struct_kind::impl_struct;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;

use crate::derive_data::ReflectDerive;

/// Generate all implementations for a parsed `#[derive(Reflect)]` input.
pub(crate) fn impl_reflect(derive: &ReflectDerive) -> TokenStream {
    match derive {
        ReflectDerive::Struct(info) => impl_struct(info),
        ReflectDerive::Opaque(meta) => impl_opaque(meta),
    }
}
