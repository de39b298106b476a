use core::any::TypeId;
use core::fmt;

use thiserror::Error;

use crate::info::{OpaqueInfo, OptionInfo, RecordInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`] or [`TypeInfo::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// A [`DynamicRecord`](crate::ops::DynamicRecord).
    Record,
    /// An `Option<T>`.
    Option,
    /// An atomic value whose inside is not visible to reflection.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Record => f.pad("Record"),
            Self::Option => f.pad("Option"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned by the `TypeInfo::as_*` casts when the info is of another kind.
///
/// ```
/// use expando_reflect::info::{ReflectKind, Typed};
///
/// let err = u8::type_info().as_struct().unwrap_err();
///
/// assert_eq!(err.received, ReflectKind::Opaque);
/// assert_eq!(err.to_string(), "expected a Struct type, found Opaque");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected} type, found {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// FieldClass

/// How a projection treats a field, decided from the field's declared type.
///
/// - `Primitive`: copied as-is, never recursed into, never filtered.
/// - `Composite`: recursed into by deep projection, and dropped when `None`
///   if null composites are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Primitive,
    Composite,
}

impl FieldClass {
    #[inline]
    pub const fn is_primitive(self) -> bool {
        matches!(self, Self::Primitive)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained through [`Typed::type_info`] when the type is known statically,
/// or [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Record(RecordInfo),
    Option(OptionInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_record: Record => RecordInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Record(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [kind](ReflectKind) of this `TypeInfo`.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Record(_) => ReflectKind::Record,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Classifies a *declared* type for projection.
    ///
    /// Opaque types are primitive, structs and records are composite.
    /// `Option<T>` takes the class of `T`, so `Option<u32>` is a nullable
    /// primitive while `Option<Address>` is a nullable composite.
    ///
    /// # Examples
    ///
    /// ```
    /// use expando_reflect::info::{FieldClass, Typed};
    /// use expando_reflect::ops::DynamicRecord;
    ///
    /// assert_eq!(<Option<u32>>::type_info().class(), FieldClass::Primitive);
    /// assert_eq!(String::type_info().class(), FieldClass::Primitive);
    /// assert_eq!(DynamicRecord::type_info().class(), FieldClass::Composite);
    /// ```
    pub fn class(&self) -> FieldClass {
        match self {
            Self::Opaque(_) => FieldClass::Primitive,
            Self::Struct(_) | Self::Record(_) => FieldClass::Composite,
            Self::Option(info) => info.some_info().class(),
        }
    }

    /// Shorthand for `self.class().is_primitive()`.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.class().is_primitive()
    }
}
