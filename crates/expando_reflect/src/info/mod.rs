//! Compile-time type information.
//!
//! - [`TypePath`]: static type path and short name, [`DynamicTypePath`] for `dyn` dispatch.
//! - [`Type`]: a `TypeId` together with its `TypePath` accessors.
//! - [`TypeInfo`]: one of [`StructInfo`], [`RecordInfo`], [`OptionInfo`], [`OpaqueInfo`].
//! - [`NamedField`]: a struct field's name and declared type.
//! - [`ReflectKind`]: the kind of a reflected type.
//! - [`FieldClass`]: primitive or composite, as decided by projection.
//! - [`Typed`]: static access to `TypeInfo`, [`DynamicTyped`] for `dyn` dispatch.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod opaque_info;
mod option_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use opaque_info::{OpaqueInfo, RecordInfo};
pub use option_info::OptionInfo;
pub use struct_info::StructInfo;
pub use type_info::{FieldClass, ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
