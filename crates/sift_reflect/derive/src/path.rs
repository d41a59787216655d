//! Paths into `sift_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `sift_reflect` crate.
///
/// 1. For crates that depend on `sift_reflect`, `::sift_reflect` is returned.
/// 2. For crates that depend on `sift`, `::sift::reflect` is returned.
/// 3. For other situations, `::sift_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively costly, so the path is obtained once per
/// derive and passed around.
pub(crate) fn sift_reflect() -> syn::Path {
    sift_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sift_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(path: &syn::Path) -> TokenStream {
    quote! { #path::Reflect }
}

#[inline(always)]
pub(crate) fn typed_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn reflect_ref_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::GenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn any_() -> TokenStream {
    quote! { ::core::any::Any }
}
