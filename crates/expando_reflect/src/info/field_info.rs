use core::any::{Any, TypeId};

use crate::info::{FieldClass, TypeInfo, Typed};

/// Information for a named (struct) field: its name and *declared* type.
///
/// # Examples
///
/// ```
/// use expando_reflect::{derive::Reflect, info::{FieldClass, Typed}};
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     field_a: f32,
///     field_b: Option<String>,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(1).unwrap();
///
/// assert!(field_info.type_is::<Option<String>>());
/// assert_eq!(field_info.name(), "field_b");
/// assert_eq!(field_info.class(), FieldClass::Primitive);
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the declared field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared field type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the [`FieldClass`] of the declared field type.
    #[inline]
    pub fn class(&self) -> FieldClass {
        self.type_info().class()
    }
}
