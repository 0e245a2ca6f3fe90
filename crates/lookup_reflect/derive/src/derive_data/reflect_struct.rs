use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Field, LitStr, Type, ext::IdentExt};

use super::{FieldAttributes, ReflectMeta};

/// A field of a named-field struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The field name as seen by reflection, without the `r#` prefix.
    pub fn reflect_name(&self) -> LitStr {
        // Named fields always carry an ident.
        let name = self
            .data
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .unwrap_or_default();
        LitStr::new(&name, Span::call_site())
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }
}

/// A named-field struct, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }

    pub fn active_types(&self) -> Vec<&Type> {
        self.active_fields().map(StructField::ty).collect()
    }

    /// `TypeInfo::Struct(StructInfo::new::<Self>(&[ ... ]))`
    pub fn to_info_tokens(&self) -> TokenStream {
        let reflect_path = self.meta.lookup_reflect_path();

        let type_info_ = crate::path::type_info_(reflect_path);
        let struct_info_ = crate::path::struct_info_(reflect_path);
        let named_field_ = crate::path::named_field_(reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = field.ty();
            let name = field.reflect_name();
            quote! { #named_field_::new::<#ty>(#name) }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[#(#fields),*]))
        }
    }
}
