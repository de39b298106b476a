use alloc::format;

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use super::ReflectSerializer;
use super::error_utils::make_custom_error;

use crate::info::TypeInfo;
use crate::ops::Struct;

/// A serializer for [`Struct`] values.
pub(super) struct StructSerializer<'a> {
    pub struct_value: &'a dyn Struct,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let type_info = self.struct_value.reflect_type_info();

        let TypeInfo::Struct(struct_info) = type_info else {
            return Err(make_custom_error(format!(
                "expected struct but received {type_info:?}"
            )));
        };

        let mut state =
            serializer.serialize_struct(struct_info.ty().name(), struct_info.field_len())?;

        for field in struct_info.iter() {
            let name = field.name();
            if let Some(value) = self.struct_value.field(name) {
                state.serialize_field(name, &ReflectSerializer::new(value))?;
            } else {
                return Err(make_custom_error(format!(
                    "field `{name}` was missing while serializing type {}",
                    struct_info.type_path()
                )));
            }
        }

        state.end()
    }
}
