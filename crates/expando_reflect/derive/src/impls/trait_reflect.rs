use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation codes for `Reflect`.
///
/// - `kind`: the `ReflectKind`/`ReflectRef` variant, `Struct` or `Opaque`.
/// - `extra_bound`: traits `Self` must implement besides `Clone`.
/// - `partial_eq_tokens`, `debug_tokens`: method items, possibly empty.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: TokenStream,
    extra_bound: TokenStream,
    partial_eq_tokens: TokenStream,
    debug_tokens: TokenStream,
) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(reflect_path);
    let macro_exports_ = crate::path::macro_exports_(reflect_path);
    let option_ = crate::path::option_();
    let clone_ = crate::path::clone_();

    let serialize_tokens = if meta.attrs().serialize.is_some() {
        quote! {
            #[inline]
            fn reflect_serialize(&self) -> #option_<&dyn #macro_exports_::erased_serde::Serialize> {
                #option_::Some(self)
            }
        }
    } else {
        crate::utils::empty()
    };

    let self_ty = meta.self_ty();
    let serialize_bound = meta
        .attrs()
        .serialize
        .map(|_| quote!(+ #macro_exports_::erased_serde::Serialize));
    let extra = quote! { #self_ty: #clone_ #extra_bound #serialize_bound };

    let ident = meta.ident();
    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = meta.where_clause(&meta.param_bound(), Some(extra));

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_clone(&self) -> #macro_exports_::Box<dyn #reflect_> {
                #macro_exports_::Box::new(<Self as #clone_>::clone(self))
            }

            #partial_eq_tokens

            #debug_tokens

            #serialize_tokens
        }
    }
}
