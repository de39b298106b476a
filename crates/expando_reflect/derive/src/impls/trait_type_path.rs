use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

fn static_path_cell(reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// `impls::concat(&[base, "<", T::accessor(), ", ", U::accessor(), ">"])`
fn concat_with_params(meta: &ReflectMeta, base: TokenStream, accessor: TokenStream) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let impls_ = crate::path::impls_(reflect_path);
    let type_path_ = crate::path::type_path_(reflect_path);

    let mut pieces = vec![base, quote!("<")];
    for (index, ident) in meta.type_params().enumerate() {
        if index > 0 {
            pieces.push(quote!(", "));
        }
        pieces.push(quote!(<#ident as #type_path_>::#accessor()));
    }
    pieces.push(quote!(">"));

    quote! {
        #impls_::concat(&[#(#pieces),*])
    }
}

/// Generate implementation codes for `TypePath`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let type_path_ = crate::path::type_path_(reflect_path);

    let ident = meta.ident();
    let base_path = meta.base_path();
    let base_name = meta.base_name();

    let (type_path, type_name, inline_flag) = if meta.impl_with_generic() {
        (
            static_path_cell(
                reflect_path,
                concat_with_params(meta, base_path, quote!(type_path)),
            ),
            static_path_cell(
                reflect_path,
                concat_with_params(meta, quote!(#base_name), quote!(type_name)),
            ),
            crate::utils::empty(),
        )
    } else {
        (base_path, quote!(#base_name), quote! { #[inline] })
    };

    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = meta.where_clause(&type_path_, None);

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
