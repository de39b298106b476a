use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Type information for `Option<T>`.
///
/// # Examples
///
/// ```
/// use expando_reflect::info::Typed;
///
/// let info = <Option<u8>>::type_info().as_option().unwrap();
///
/// assert!(info.some_info().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    // Delayed, `T`'s info is only built on first access.
    some_info: fn() -> &'static TypeInfo,
}

impl OptionInfo {
    /// Creates the info of `O`, an option wrapping `T`.
    #[inline]
    pub fn new<O: TypePath, T: Typed>() -> Self {
        Self {
            ty: Type::of::<O>(),
            some_info: T::type_info,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
