//! Fully qualified paths of `core` items, immune to shadowing at the
//! derive site.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! impl_fp {
    ($($name:ident => $path:path),* $(,)?) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($path).to_tokens(tokens);
            }
        }
    )*};
}

impl_fp! {
    AnyFP => ::core::any::Any,
    SendFP => ::core::marker::Send,
    SyncFP => ::core::marker::Sync,
    OptionFP => ::core::option::Option,
    FormatterFP => ::core::fmt::Formatter,
    FmtResultFP => ::core::fmt::Result,
}
