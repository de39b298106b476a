//! Serialization of reflected values and records.
//!
//! - [`ReflectSerializer`]: serializes any `&dyn Reflect` without knowing its
//!   concrete type. Structs and records become maps, options become `None` or
//!   their value, opaque values use their own `Serialize` impl.
//! - [`DynamicRecord`] implements `Serialize` directly, keys in insertion order.
//!
//! Opaque user types only take part when derived with `#[reflect(serialize)]`,
//! serializing one without it is an error.
//!
//! Only serialization is provided, a record does not know the types it
//! should be read back into.
//!
//! [`DynamicRecord`]: crate::ops::DynamicRecord

// -----------------------------------------------------------------------------
// Modules

mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use ser::ReflectSerializer;
