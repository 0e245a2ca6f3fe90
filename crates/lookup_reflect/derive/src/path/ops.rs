use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn reflect_ref_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::StructFieldIter
    }
}
