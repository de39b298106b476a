//! Data access interfaces and the dynamic record type.
//!
//! - [`Struct`]: field access by name or index for structs with named fields.
//! - [`ReflectRef`]: the kind-specific view returned by [`Reflect::reflect_ref`].
//! - [`DynamicRecord`]: an ordered, string-keyed container of untyped values,
//!   with indexed ([`get`]) and attribute-style ([`get_attr`]) access.
//! - [`RecordError`]: failures of record operations.
//!
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`get`]: DynamicRecord::get
//! [`get_attr`]: DynamicRecord::get_attr

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod record_error;
mod record_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;
pub use record_error::RecordError;
pub use record_ops::{DynamicRecord, RecordIter};
pub use struct_ops::{Struct, StructFieldIter};
