use syn::ext::IdentExt;
use syn::{Fields, Ident, Type};

use crate::derive_data::{FieldAttributes, ReflectMeta};

/// A named field visible to reflection.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

impl StructField<'_> {
    /// The field name as seen at runtime, `r#type` gives `type`.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Collects the named fields, skipping those marked `#[reflect(skip)]`.
    pub fn new(meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let mut active = Vec::new();
        for field in fields {
            if FieldAttributes::parse_attrs(&field.attrs)?.skip {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new_spanned(field, "expected a named field"));
            };
            active.push(StructField {
                ident,
                ty: &field.ty,
            });
        }

        Ok(Self {
            meta,
            fields: active,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn active_fields(&self) -> impl ExactSizeIterator<Item = &StructField<'a>> {
        self.fields.iter()
    }
}
