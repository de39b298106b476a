use alloc::format;

use serde_core::{Serialize, Serializer};

use super::error_utils::make_custom_error;
use super::struct_serializer::StructSerializer;

use crate::Reflect;
use crate::ops::ReflectRef;

/// Serializer for reflected values, without type information.
///
/// # Serialization Rules
///
/// 1. A value whose type provides [`Reflect::reflect_serialize`] (primitives
///    and types derived with `#[reflect(serialize)]`) uses it.
/// 2. Otherwise the value is serialized through [`Reflect::reflect_ref`]:
///     - structs as structs of their fields,
///     - records as maps, see the `Serialize` impl of [`DynamicRecord`],
///     - `None` as none and `Some(v)` as `v`.
/// 3. Other opaque values fail with a custom error.
///
/// # Examples
///
/// ```
/// use expando_reflect::{derive::Reflect, serde::ReflectSerializer};
///
/// #[derive(Reflect, Clone)]
/// struct Point {
///     x: i32,
///     y: Option<i32>,
/// }
///
/// let point = Point { x: 1, y: None };
/// let json = serde_json::to_string(&ReflectSerializer::new(&point)).unwrap();
///
/// assert_eq!(json, r#"{"x":1,"y":null}"#);
/// ```
///
/// [`DynamicRecord`]: crate::ops::DynamicRecord
#[derive(Clone, Copy)]
pub struct ReflectSerializer<'a> {
    value: &'a dyn Reflect,
}

impl<'a> ReflectSerializer<'a> {
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for ReflectSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(value) = self.value.reflect_serialize() {
            return erased_serde::serialize(value, serializer);
        }

        match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => StructSerializer { struct_value }.serialize(serializer),
            ReflectRef::Record(record) => record.serialize(serializer),
            ReflectRef::Option(Some(value)) => serializer.serialize_some(&ReflectSerializer::new(value)),
            ReflectRef::Option(None) => serializer.serialize_none(),
            ReflectRef::Opaque(value) => Err(make_custom_error(format!(
                "type `{}` is not serializable, derive it with `#[reflect(serialize)]`",
                value.reflect_type_path()
            ))),
        }
    }
}
