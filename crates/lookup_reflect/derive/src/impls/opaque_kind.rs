use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::ReflectMeta;
use crate::path::fp::{FmtResultFP, FormatterFP};

/// Implement full reflect for opaque type.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    // trait: Typed
    let typed_trait_tokens = if meta.attrs().impl_typed {
        impl_trait_typed(meta, get_opaque_info_tokens(meta), &[])
    } else {
        crate::utils::empty()
    };

    // trait: Reflect
    let reflect_trait_tokens =
        impl_trait_reflect(meta, quote!(Opaque), get_opaque_debug_impl(meta), &[]);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

fn get_opaque_info_tokens(meta: &ReflectMeta) -> TokenStream {
    let reflect_path = meta.lookup_reflect_path();
    let type_info_ = crate::path::type_info_(reflect_path);
    let opaque_info_ = crate::path::opaque_info_(reflect_path);

    quote! {
        #type_info_::Opaque(#opaque_info_::new::<Self>())
    }
}

fn get_opaque_debug_impl(meta: &ReflectMeta) -> TokenStream {
    let name = meta.type_ident().to_string();

    quote! {
        fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
            f.write_str(#name)
        }
    }
}
