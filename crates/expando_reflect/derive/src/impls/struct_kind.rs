use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = {
        let reflect_path = meta.reflect_path();
        let reflect_ = crate::path::reflect_(reflect_path);
        let impls_ = crate::path::impls_(reflect_path);
        let option_ = crate::path::option_();

        let partial_eq_tokens = quote! {
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #option_<bool> {
                #impls_::struct_partial_eq(self, other)
            }
        };

        // The default `reflect_debug` already prints structs field by field.
        impl_trait_reflect(
            meta,
            quote!(Struct),
            crate::utils::empty(),
            partial_eq_tokens,
            crate::utils::empty(),
        )
    };

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// `TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<Ty>("name"), ...]))`
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let reflect_path = info.meta().reflect_path();
    let type_info_ = crate::path::type_info_(reflect_path);
    let struct_info_ = crate::path::struct_info_(reflect_path);
    let named_field_ = crate::path::named_field_(reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = field.name();
        quote! { #named_field_::new::<#ty>(#name) }
    });

    quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields),*
        ]))
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let reflect_path = meta.reflect_path();
    let struct_ = crate::path::struct_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(reflect_path);
    let option_ = crate::path::option_();

    let field_names: Vec<String> = info.active_fields().map(StructField::name).collect();
    let field_idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();
    let field_indices: Vec<usize> = (0..field_names.len()).collect();
    let field_count = field_names.len();

    let ident = meta.ident();
    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = meta.where_clause(&meta.param_bound(), Some(clone_predicate(info)));

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#field_idents),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#field_idents),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

// `Struct: Reflect`, so the `Struct` impl needs the bounds of the `Reflect` impl.
fn clone_predicate(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let self_ty = meta.self_ty();
    let clone_ = crate::path::clone_();
    let serialize_bound = meta.attrs().serialize.map(|_| {
        let macro_exports_ = crate::path::macro_exports_(meta.reflect_path());
        quote!(+ #macro_exports_::erased_serde::Serialize)
    });

    quote! { #self_ty: #clone_ #serialize_bound }
}
