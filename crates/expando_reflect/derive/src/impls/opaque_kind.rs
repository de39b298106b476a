use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectMeta;

/// Implement full reflect for opaque type.
///
/// Opaque types are compared with `PartialEq` and printed with `Debug`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let macro_exports_ = crate::path::macro_exports_(reflect_path);
    let type_info_ = crate::path::type_info_(reflect_path);
    let opaque_info_ = crate::path::opaque_info_(reflect_path);
    let option_ = crate::path::option_();
    let partial_eq_ = crate::path::partial_eq_();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! { #type_info_::Opaque(#opaque_info_::new::<Self>()) },
    );

    // trait: Reflect
    let partial_eq_tokens = quote! {
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #option_<bool> {
            #option_::Some(match other.downcast_ref::<Self>() {
                #option_::Some(other) => <Self as #partial_eq_>::eq(self, other),
                #option_::None => false,
            })
        }
    };

    let debug_tokens = quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut #macro_exports_::fmt::Formatter<'_>) -> #macro_exports_::fmt::Result {
            #macro_exports_::fmt::Debug::fmt(self, f)
        }
    };

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Opaque),
        quote!(+ #partial_eq_ + #macro_exports_::fmt::Debug),
        partial_eq_tokens,
        debug_tokens,
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
