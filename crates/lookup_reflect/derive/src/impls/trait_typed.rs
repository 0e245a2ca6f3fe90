use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`
///
/// For param `type_info_tokens`, See the `to_info_tokens` of [`ReflectStruct`].
///
/// For param `field_types`, See [`ReflectMeta::split_generics`].
///
/// [`ReflectStruct`]: crate::derive_data::ReflectStruct
pub(crate) fn impl_trait_typed(
    meta: &ReflectMeta,
    type_info_tokens: TokenStream,
    field_types: &[&Type],
) -> TokenStream {
    let reflect_path = meta.lookup_reflect_path();
    let trait_typed_ = crate::path::typed_(reflect_path);
    let type_info_ = crate::path::type_info_(reflect_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(field_types);

    quote! {
        impl #impl_generics #trait_typed_ for #type_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
