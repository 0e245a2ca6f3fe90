use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::{ReflectStruct, StructField};
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let field_types = info.active_types();

    // trait: Typed
    let typed_trait_tokens = if meta.attrs().impl_typed {
        impl_trait_typed(meta, info.to_info_tokens(), &field_types)
    } else {
        crate::utils::empty()
    };

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        crate::utils::empty(),
        &field_types,
    );

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let reflect_path = meta.lookup_reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let struct_ = crate::path::struct_(reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(reflect_path);
    let option_ = OptionFP.to_token_stream();

    let fields: Vec<&StructField> = info.active_fields().collect();

    let field_len = fields.len();
    let field_names: Vec<_> = fields.iter().map(|field| field.reflect_name()).collect();
    let field_members: Vec<_> = fields.iter().map(|field| &field.data.ident).collect();
    let field_indices: Vec<_> = (0..field_len).map(Literal::usize_unsuffixed).collect();

    let type_ident = meta.type_ident();
    let field_types = info.active_types();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&field_types);

    quote! {
        impl #impl_generics #struct_ for #type_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#field_members),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#field_members),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
