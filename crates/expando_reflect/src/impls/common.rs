use core::fmt;

use crate::Reflect;
use crate::ops::{ReflectRef, Struct};

/// A function used to implement [`Reflect::reflect_partial_eq`] for structs.
///
/// # Rules
///
/// 1. If `y` is not a struct, return `Some(false)`.
/// 2. If the field counts differ, return `Some(false)`.
/// 3. Compare fields by name, a field missing from `x` gives `Some(false)`.
/// 4. The first field comparison that is not `Some(true)` is returned.
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (index, y_field) in y.iter_fields().enumerate() {
        let Some(name) = y.name_at(index) else {
            return Some(false);
        };
        match x.field(name) {
            Some(x_field) => {
                let result = x_field.reflect_partial_eq(y_field);
                if result != Some(true) {
                    return result;
                }
            }
            None => return Some(false),
        }
    }
    Some(true)
}

/// A function used to implement [`Reflect::reflect_partial_eq`] for options.
///
/// `None` equals `None`; two `Some` compare their contents.
pub fn option_partial_eq(x: Option<&dyn Reflect>, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Option(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x, y) {
        (Some(x), Some(y)) => x.reflect_partial_eq(y),
        (None, None) => Some(true),
        _ => Some(false),
    }
}

/// A function used to implement [`Reflect::reflect_debug`] for structs.
///
/// Prints like a derived `Debug`, with the type name as the struct name.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        if let Some(name) = dyn_struct.name_at(index) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}
