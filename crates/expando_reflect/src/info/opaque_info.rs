use crate::info::{Type, TypePath};

/// Type information for opaque (atomic) types.
///
/// The inside of an opaque value is not visible to reflection: numbers,
/// strings, `bool`, `char`, durations, enums and any struct derived with
/// `#[reflect(opaque)]`. Projection treats them as primitives.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: TypePath>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}

/// Type information for [`DynamicRecord`](crate::ops::DynamicRecord).
///
/// A record has no static field list, its fields are discovered at runtime.
#[derive(Clone, Debug)]
pub struct RecordInfo {
    ty: Type,
}

impl RecordInfo {
    #[inline]
    pub fn new<T: TypePath>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
