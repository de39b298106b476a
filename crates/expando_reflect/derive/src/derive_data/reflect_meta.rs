use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{GenericParam, Generics, Ident, ImplGenerics, TypeGenerics};

use crate::derive_data::TypeAttributes;

/// Data shared by every generated impl of one type.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    /// Only type parameters are supported, reflected types must be `'static`
    /// and const parameters would not show up in the type path.
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new_spanned(
                        lifetime,
                        "reflected types must be `'static`, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "const generic parameters are not supported by `#[derive(Reflect)]`",
                    ));
                }
            }
        }

        Ok(Self {
            attrs,
            ident,
            generics,
            reflect_path: crate::path::expando_reflect(),
        })
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// The path of `expando_reflect` as seen from the deriving crate.
    #[inline]
    pub fn reflect_path(&self) -> &syn::Path {
        &self.reflect_path
    }

    /// Whether `TypePath` and `Typed` need a per-instantiation cell.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Identifiers of the type parameters, in declaration order.
    pub fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// `Reflect + Typed + Clone`, the bound of every type parameter in the
    /// `Typed`, `Reflect` and `Struct` impls.
    pub fn param_bound(&self) -> TokenStream {
        let reflect_ = crate::path::reflect_(&self.reflect_path);
        let typed_ = crate::path::typed_(&self.reflect_path);
        let clone_ = crate::path::clone_();
        quote! { #reflect_ + #typed_ + #clone_ }
    }

    #[inline]
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>) {
        let (impl_generics, ty_generics, _) = self.generics.split_for_impl();
        (impl_generics, ty_generics)
    }

    /// Builds a where clause bounding every type parameter by `param_bound`,
    /// followed by `extra` and the user's own predicates.
    pub fn where_clause(&self, param_bound: &TokenStream, extra: Option<TokenStream>) -> TokenStream {
        let mut predicates: Vec<TokenStream> = self
            .generics
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                quote! { #ident: #param_bound }
            })
            .collect();

        predicates.extend(extra);

        if let Some(where_clause) = &self.generics.where_clause {
            predicates.extend(where_clause.predicates.iter().map(ToTokens::to_token_stream));
        }

        if predicates.is_empty() {
            crate::utils::empty()
        } else {
            quote! { where #(#predicates,)* }
        }
    }

    /// `Self` spelled with its generics, usable in a where clause.
    pub fn self_ty(&self) -> TokenStream {
        let ident = self.ident;
        let (_, ty_generics) = self.split_generics();
        quote! { #ident #ty_generics }
    }

    /// The type path without generics, e.g. `my_crate::shapes::Circle`.
    pub fn base_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => custom.to_token_stream(),
            None => {
                let ident = self.ident.unraw().to_string();
                quote! { ::core::concat!(::core::module_path!(), "::", #ident) }
            }
        }
    }

    /// The short name without generics, e.g. `Circle`.
    pub fn base_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
