use alloc::borrow::{Cow, ToOwned};
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{FieldClass, StructInfo};
use crate::ops::{DynamicRecord, ReflectRef, Struct};
use crate::project::ProjectError;

/// One readable field of a projection source.
#[derive(Debug)]
pub struct FieldSlot<'a> {
    /// The field name, used as the output key.
    pub name: Cow<'static, str>,
    /// The class of the field's declared type.
    pub class: FieldClass,
    /// The current value, `None` for an absent value.
    pub value: Option<&'a dyn Reflect>,
}

/// What an enumerator found in a projection source.
#[derive(Debug)]
pub enum SourceFields<'a> {
    /// The source is an atomic value, it becomes a scalar record.
    Scalar(&'a dyn Reflect),
    /// The source's readable fields, in a stable order for a given type.
    Fields(Vec<FieldSlot<'a>>),
}

/// Lists the `(name, class, value)` triples of a source value.
///
/// [`ObjectProjector`] only talks to its source through this trait, so the
/// projection rules can be driven by synthetic field lists as well as by
/// [`ReflectFields`].
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use expando_reflect::Reflect;
/// use expando_reflect::info::FieldClass;
/// use expando_reflect::project::{
///     FieldEnumerator, FieldSlot, ObjectProjector, ProjectError, ProjectOptions, SourceFields,
/// };
///
/// /// Exposes any value as a single field named `value`.
/// struct Wrap;
///
/// impl FieldEnumerator for Wrap {
///     fn enumerate<'a>(&self, source: &'a dyn Reflect) -> Result<SourceFields<'a>, ProjectError> {
///         Ok(SourceFields::Fields(vec![FieldSlot {
///             name: Cow::Borrowed("value"),
///             class: FieldClass::Primitive,
///             value: Some(source),
///         }]))
///     }
/// }
///
/// let record = ObjectProjector::with_enumerator(Wrap)
///     .project(&7_u8, ProjectOptions::new())
///     .unwrap();
///
/// assert_eq!(record.get_as::<u8>("value"), Some(&7));
/// ```
///
/// [`ObjectProjector`]: crate::project::ObjectProjector
pub trait FieldEnumerator {
    /// Enumerates the readable fields of `source`.
    fn enumerate<'a>(&self, source: &'a dyn Reflect) -> Result<SourceFields<'a>, ProjectError>;
}

/// The default [`FieldEnumerator`], backed by [`Reflect::reflect_ref`].
///
/// - Structs: fields in declaration order, classified by their declared type.
/// - Records: entries in insertion order, classified by their runtime value;
///   an entry holding no value counts as composite.
/// - `Some(v)`: enumerates `v`. `None`: fails with [`ProjectError::NullSource`].
/// - Opaque values and scalar records: [`SourceFields::Scalar`].
///
/// Option-typed field values are unwrapped: `Some(v)` yields `v`, `None`
/// yields an absent value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReflectFields;

impl FieldEnumerator for ReflectFields {
    fn enumerate<'a>(&self, source: &'a dyn Reflect) -> Result<SourceFields<'a>, ProjectError> {
        match source.reflect_ref() {
            ReflectRef::Option(None) => Err(ProjectError::NullSource),
            ReflectRef::Option(Some(inner)) => self.enumerate(inner),
            ReflectRef::Opaque(value) => Ok(SourceFields::Scalar(value)),
            ReflectRef::Struct(value) => Ok(SourceFields::Fields(struct_fields(value))),
            ReflectRef::Record(record) => Ok(record_fields(record)),
        }
    }
}

fn struct_fields(value: &dyn Struct) -> Vec<FieldSlot<'_>> {
    let info: Option<&'static StructInfo> = value.reflect_type_info().as_struct().ok();

    let mut fields = Vec::with_capacity(value.field_len());
    for (index, field) in value.iter_fields().enumerate() {
        let Some(name) = value.name_at(index) else {
            continue;
        };
        let (name, class) = match info.and_then(|info| info.field(name)) {
            Some(declared) => (Cow::Borrowed(declared.name()), declared.class()),
            None => (Cow::Owned(name.to_owned()), runtime_class(Some(field))),
        };
        fields.push(FieldSlot {
            name,
            class,
            value: unwrap_optional(field),
        });
    }
    fields
}

fn record_fields(record: &DynamicRecord) -> SourceFields<'_> {
    if let Some(value) = record.scalar() {
        return SourceFields::Scalar(value);
    }

    let fields = record
        .entries()
        .map(|(name, value)| {
            let value = value.and_then(unwrap_optional);
            FieldSlot {
                name: name.clone(),
                class: runtime_class(value),
                value,
            }
        })
        .collect();
    SourceFields::Fields(fields)
}

/// Classifies a value without a declared type, by its concrete type.
fn runtime_class(value: Option<&dyn Reflect>) -> FieldClass {
    match value {
        Some(value) => value.reflect_type_info().class(),
        None => FieldClass::Composite,
    }
}

/// Strips `Option` layers: `Some(v)` gives `v`, `None` gives an absent value.
fn unwrap_optional(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Option(inner) = value.reflect_ref() {
        value = inner?;
    }
    Some(value)
}
