use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation codes for `Typed`.
///
/// `info_tokens` evaluates to the `TypeInfo` of `Self`.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, info_tokens: TokenStream) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let typed_ = crate::path::typed_(reflect_path);
    let type_info_ = crate::path::type_info_(reflect_path);

    let body = if meta.impl_with_generic() {
        let cell_ = crate::path::generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| {
                #info_tokens
            })
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| {
                #info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = meta.where_clause(&meta.param_bound(), None);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}
