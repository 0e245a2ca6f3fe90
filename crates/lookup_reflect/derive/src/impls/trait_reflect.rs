use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `kind` names both the `ReflectKind` and the `ReflectRef` variant,
/// `debug_tokens` optionally overrides `reflect_debug`.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: TokenStream,
    debug_tokens: TokenStream,
    field_types: &[&Type],
) -> TokenStream {
    let reflect_path = meta.lookup_reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(reflect_path);

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(field_types);

    quote! {
        impl #impl_generics #reflect_ for #type_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #debug_tokens
        }
    }
}
