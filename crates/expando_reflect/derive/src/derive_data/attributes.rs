//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level attributes.
///
/// - `#[reflect(opaque)]`: treat the type as an atomic value.
/// - `#[reflect(serialize)]`: the type implements `serde::Serialize`.
/// - `#[reflect(type_path = "a::b::Name")]`: override the type path,
///   without generics (they are appended).
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub opaque: Option<Span>,
    pub serialize: Option<Span>,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    this.opaque = Some(meta.path.require_ident()?.span());
                } else if meta.path.is_ident("serialize") {
                    this.serialize = Some(meta.path.require_ident()?.span());
                } else if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    this.type_path = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error(
                        "unsupported reflect attribute, expected `opaque`, `serialize` or `type_path`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}

/// Field level attributes.
///
/// - `#[reflect(skip)]`: the field is not visible to reflection.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported reflect field attribute, expected `skip`"))
                }
            })?;
        }

        Ok(this)
    }
}
