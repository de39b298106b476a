use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::time::Duration;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_primitive {
    (@native $($ty:ident),* $(,)?) => {
        $(impl_reflect_primitive!($ty, stringify!($ty), stringify!($ty));)*
    };
    ($ty:ty, $path:expr, $name:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(Clone::clone(self))
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(
                    other
                        .downcast_ref::<Self>()
                        .is_some_and(|other| PartialEq::eq(self, other)),
                )
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }

            #[inline]
            fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                Some(self)
            }
        }
    };
}

impl_reflect_primitive!(
    @native bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl_reflect_primitive!(String, "alloc::string::String", "String");
impl_reflect_primitive!(&'static str, "&str", "&str");
impl_reflect_primitive!(Cow<'static, str>, "alloc::borrow::Cow<str>", "Cow<str>");
impl_reflect_primitive!(Duration, "core::time::Duration", "Duration");

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::{FieldClass, ReflectKind, TypePath, Typed};

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(u64::type_path(), "u64");
        assert_eq!(<&str>::type_name(), "&str");
        assert_eq!(Duration::type_path(), "core::time::Duration");
        assert_eq!(String::type_info().class(), FieldClass::Primitive);
        assert_eq!(<Cow<'static, str>>::type_info().class(), FieldClass::Primitive);
        assert_eq!('c'.reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn partial_eq_requires_same_type() {
        assert_eq!(1_u8.reflect_partial_eq(&1_u8), Some(true));
        assert_eq!(1_u8.reflect_partial_eq(&2_u8), Some(false));
        assert_eq!(1_u8.reflect_partial_eq(&1_u16), Some(false));
        assert_eq!("a".reflect_partial_eq(&String::from("a")), Some(false));
    }
}
