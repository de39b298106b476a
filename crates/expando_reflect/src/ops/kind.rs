use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{DynamicRecord, Struct};

/// An immutable enumeration of "kinds" of a reflected type.
///
/// Each variant contains a trait object with methods specific to a kind.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Record(&'a DynamicRecord),
    /// The contents of an `Option<T>`, `None` for an empty option.
    Option(Option<&'a dyn Reflect>),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this `ReflectRef`.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Record(_) => ReflectKind::Record,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
