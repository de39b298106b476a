//! Dynamic records and the reflection needed to build them from typed values.
//!
//! - [`ops::DynamicRecord`]: an ordered, string-keyed container of untyped
//!   values, readable through indexed access ([`get`]) or attribute-style
//!   access ([`get_attr`]).
//! - [`project`]: converts any reflected value into a [`DynamicRecord`],
//!   shallow or deep, optionally dropping `None` composite fields.
//! - [`derive::Reflect`]: implements the reflection traits for user types.
//!
//! ```
//! use expando_reflect::derive::Reflect;
//! use expando_reflect::project::project;
//!
//! #[derive(Reflect, Clone)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let record = project(&Point { x: 1, y: 2 }).unwrap();
//!
//! assert_eq!(record.get_as::<i32>("x"), Some(&1));
//! assert!(record.get("z").is_none());
//! assert!(record.get_attr("z").is_err());
//! ```
//!
//! [`DynamicRecord`]: ops::DynamicRecord
//! [`get`]: ops::DynamicRecord::get
//! [`get_attr`]: ops::DynamicRecord::get_attr
#![cfg_attr(docsrs, feature(doc_cfg))]

// The derive macro emits `::expando_reflect::...` paths, this alias lets the
// crate derive its own test fixtures.
extern crate self as expando_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod project;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use expando_reflect_derive as derive;
pub use reflection::Reflect;
