use syn::{Data, DeriveInput, Fields};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed shape of a derive input.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }`
    Struct(ReflectStruct<'a>),
    /// `#[reflect(opaque)]`, enums, tuple structs and unit structs.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let forced_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(_) if !forced_opaque => {
                    Ok(Self::Struct(ReflectStruct::new(meta, &data.fields)?))
                }
                _ => Ok(Self::Opaque(meta)),
            },
            Data::Enum(_) => Ok(Self::Opaque(meta)),
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "unions are not supported by `#[derive(Reflect)]`",
            )),
        }
    }
}
