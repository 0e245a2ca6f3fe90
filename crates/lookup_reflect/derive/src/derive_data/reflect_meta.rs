use std::collections::BTreeSet;

use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;
use crate::path::fp::{AnyFP, SendFP, SyncFP};

/// Type metadata shared by every kind of derive.
pub(crate) struct ReflectMeta<'a> {
    /// Resolved path of `lookup_reflect` as seen by the caller.
    lookup_reflect_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
    generics: &'a Generics,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            lookup_reflect_path: crate::path::lookup_reflect(),
            attrs,
            type_ident,
            generics,
        }
    }

    #[inline]
    pub fn lookup_reflect_path(&self) -> &Path {
        &self.lookup_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn type_ident(&self) -> &'a Ident {
        self.type_ident
    }

    /// Whether the type has type or const parameters.
    ///
    /// Such types store their `TypeInfo` in a `GenericTypeInfoCell`.
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Splits the generics for an `impl` block.
    ///
    /// For generic types, the where clause gains `Self: Any + Send + Sync`
    /// and `Reflect + Typed` for every field type that mentions a type
    /// parameter:
    ///
    /// ```ignore
    /// impl<T> Reflect for Foo<T>
    /// where
    ///     Self: Any + Send + Sync,
    ///     T: Reflect + Typed,
    ///     Vec<T>: Reflect + Typed,
    /// { /* ... */ }
    /// ```
    pub fn split_generics(
        &self,
        field_types: &[&Type],
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let existing = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote! { #(#predicates,)* }
        });

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, quote! { where #existing });
        }

        let params: BTreeSet<String> = self
            .generics
            .type_params()
            .map(|param| param.ident.to_string())
            .collect();

        let mut seen = BTreeSet::new();
        let bounded = field_types
            .iter()
            .filter(|ty| mentions_any(ty.to_token_stream(), &params))
            .filter(|ty| seen.insert(ty.to_token_stream().to_string()));

        let reflect_ = crate::path::reflect_(&self.lookup_reflect_path);
        let typed_ = crate::path::typed_(&self.lookup_reflect_path);

        let where_clause = quote! {
            where
                Self: #AnyFP + #SendFP + #SyncFP,
                #existing
                #(#bounded: #reflect_ + #typed_,)*
        };

        (impl_generics, ty_generics, where_clause)
    }
}

fn mentions_any(tokens: TokenStream, params: &BTreeSet<String>) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.contains(&ident.to_string()),
        TokenTree::Group(group) => mentions_any(group.stream(), params),
        _ => false,
    })
}
