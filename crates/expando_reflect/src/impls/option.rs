use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["Option<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Option
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Option(self.as_ref().map(Reflect::as_reflect))
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::option_partial_eq(self.as_ref().map(Reflect::as_reflect), other)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{FieldClass, TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn option_path_and_class() {
        assert_eq!(<Option<String>>::type_path(), "core::option::Option<alloc::string::String>");
        assert_eq!(<Option<Option<u8>>>::type_name(), "Option<Option<u8>>");
        assert_eq!(<Option<u8>>::type_info().class(), FieldClass::Primitive);
    }

    #[test]
    fn option_reflect_ref() {
        let some = Some(3_i32);
        let ReflectRef::Option(Some(inner)) = some.reflect_ref() else {
            panic!("expected a `Some` option");
        };
        assert_eq!(inner.downcast_ref::<i32>(), Some(&3));

        let none: Option<i32> = None;
        assert!(matches!(none.reflect_ref(), ReflectRef::Option(None)));
        assert_eq!(none.reflect_partial_eq(&None::<i32>), Some(true));
        assert_eq!(some.reflect_partial_eq(&none), Some(false));
        assert_eq!(alloc::format!("{:?}", some.as_reflect()), "Some(3)");
    }
}
