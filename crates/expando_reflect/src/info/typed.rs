use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use expando_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect, Clone)]
/// struct A {
///     id: u64,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.as_struct().is_ok());
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] to keep the
/// returned reference `'static`:
///
/// ```
/// use expando_reflect::{
///     info::{Typed, TypeInfo, TypePath, OpaqueInfo},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_path(), "demo::Token");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time type information of `Self`.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented automatically for every type that implements [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// # Examples
    ///
    /// ```
    /// use expando_reflect::{Reflect, info::DynamicTyped};
    ///
    /// let value: Box<dyn Reflect> = Box::new(7_u64);
    /// assert!(value.reflect_type_info().type_is::<u64>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
