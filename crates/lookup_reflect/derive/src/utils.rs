use proc_macro2::TokenStream;

/// An empty token stream, for disabled implementations.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
