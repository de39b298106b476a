//! Paths into `expando_reflect` used by generated code.
//!
//! Keeping them in one place limits the changes needed when the layout of
//! `expando_reflect` moves.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `expando_reflect` crate.
///
/// 1. For crates that depend on `expando_reflect`, `::expando_reflect` is returned.
/// 2. For crates that depend on `expando`, `::expando::reflect` is returned.
/// 3. Otherwise `::expando_reflect` is returned, which may be incorrect.
///
/// This reads the caller's Cargo.toml, call it once per derive and pass the
/// result around.
pub(crate) fn expando_reflect() -> syn::Path {
    expando_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("expando_reflect"))
}

// -----------------------------------------------------------------------------
// Full paths of core items

pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

pub(crate) fn clone_() -> TokenStream {
    quote! { ::core::clone::Clone }
}

pub(crate) fn partial_eq_() -> TokenStream {
    quote! { ::core::cmp::PartialEq }
}

// -----------------------------------------------------------------------------
// expando_reflect items

#[inline(always)]
pub(crate) fn macro_exports_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports }
}

#[inline(always)]
pub(crate) fn reflect_(path: &syn::Path) -> TokenStream {
    quote! { #path::Reflect }
}

#[inline(always)]
pub(crate) fn impls_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls }
}

#[inline(always)]
pub(crate) fn type_path_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::TypePath }
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
pub(crate) fn struct_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn opaque_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::OpaqueInfo }
}

#[inline(always)]
pub(crate) fn named_field_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::NamedField }
}

#[inline(always)]
pub(crate) fn reflect_kind_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::ReflectKind }
}

#[inline(always)]
pub(crate) fn reflect_ref_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn struct_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::Struct }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::StructFieldIter }
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
pub(crate) fn generic_type_path_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::GenericTypePathCell }
}
