//! Parsing of `#[reflect(...)]` attributes.

use syn::{Attribute, LitBool};

use crate::REFLECT_ATTRIBUTE_NAME;

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// Type attributes

/// Type level attributes.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// Default is `true`, use `#[reflect(Typed = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub impl_typed: bool,
}

impl Default for TypeAttributes {
    #[inline]
    fn default() -> Self {
        Self { impl_typed: true }
    }
}

impl TypeAttributes {
    /// Format: `#[reflect(Typed = false)]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("Typed") {
                    this.impl_typed = meta.value()?.parse::<LitBool>()?.value;
                    return Ok(());
                }
                Err(meta.error("unsupported type attribute, expected `Typed = bool`"))
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Field level attributes.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`
    pub ignore: bool,
}

impl FieldAttributes {
    /// Format: `#[reflect(ignore)]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = true;
                    return Ok(());
                }
                Err(meta.error("unsupported field attribute, expected `ignore`"))
            })?;
        }

        Ok(this)
    }
}
