use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }`
    Struct(ReflectStruct<'a>),
    /// `struct T;`
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`#[derive(Reflect)]` does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`#[derive(Reflect)]` does not support unions",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(fields) => fields,
            Fields::Unit => {
                let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
                return Ok(Self::Opaque(ReflectMeta::new(
                    attrs,
                    &input.ident,
                    &input.generics,
                )));
            }
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "`#[derive(Reflect)]` does not support tuple structs, use named fields",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let fields = fields
            .named
            .iter()
            .map(|data| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        Ok(Self::Struct(ReflectStruct::new(meta, fields)))
    }
}
