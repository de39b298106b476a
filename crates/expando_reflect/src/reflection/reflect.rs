use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of dynamic access.
///
/// A `dyn Reflect` can be classified ([`reflect_kind`]), inspected
/// ([`reflect_ref`]), cloned without knowing its type ([`reflect_clone`])
/// and compared with another `dyn Reflect` ([`reflect_partial_eq`]).
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and for the
/// common primitive types, `Option<T>` and [`DynamicRecord`].
///
/// # Examples
///
/// ```
/// use expando_reflect::{Reflect, info::ReflectKind};
///
/// let value: Box<dyn Reflect> = Box::new(String::from("ann"));
///
/// assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
/// assert!(value.is::<String>());
///
/// let copy = value.reflect_clone();
/// assert_eq!(copy.reflect_partial_eq(&*value), Some(true));
/// ```
///
/// [`reflect_kind`]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_clone`]: Reflect::reflect_clone
/// [`reflect_partial_eq`]: Reflect::reflect_partial_eq
/// [`DynamicRecord`]: crate::ops::DynamicRecord
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the kind of the underlying type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of "kinds" of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Clones the value into a new boxed value of the same concrete type.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` means the comparison is not supported by this type.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Record(data) => fmt::Debug::fmt(data, f),
            ReflectRef::Option(Some(data)) => f.debug_tuple("Some").field(&data).finish(),
            ReflectRef::Option(None) => f.write_str("None"),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }

    /// Returns a serializable view of an opaque value, if the type supports it.
    ///
    /// Structs, records and options are serialized through their
    /// [`reflect_ref`](Reflect::reflect_ref) instead, see [`ReflectSerializer`].
    ///
    /// [`ReflectSerializer`]: crate::serde::ReflectSerializer
    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, moving it out of the box.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn downcast_and_take() {
        let value: Box<dyn Reflect> = Box::new(5_i32);
        assert!(value.is::<i32>());
        assert!(!value.is::<u32>());
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));

        let value = value.downcast::<u32>().unwrap_err();
        assert_eq!(value.take::<i32>().unwrap(), 5);
    }

    #[test]
    fn clone_keeps_concrete_type() {
        let value: Box<dyn Reflect> = Box::new(String::from("x"));
        let copy = value.reflect_clone();

        assert!(copy.is::<String>());
        assert_eq!(copy.reflect_partial_eq(&*value), Some(true));
        assert_eq!(alloc::format!("{copy:?}"), "\"x\"");
    }
}
