//! Turn any reflected object into a dynamic, attribute-accessible record.
//!
//! This crate only re-exports the workspace crates, see [`reflect`] for the
//! record type and the projector.
//!
//! ```
//! use expando::reflect::derive::Reflect;
//! use expando::reflect::project::{ProjectOptions, project_with};
//!
//! #[derive(Reflect, Clone)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Reflect, Clone)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     address: Option<Address>,
//! }
//!
//! let ann = Person {
//!     name: "Ann".into(),
//!     age: 30,
//!     address: Some(Address { city: "X".into() }),
//! };
//!
//! let record = project_with(&ann, ProjectOptions::new().deep()).unwrap();
//! let address = record.get_as::<expando::reflect::ops::DynamicRecord>("address").unwrap();
//!
//! assert_eq!(record.get_as::<u32>("age"), Some(&30));
//! assert_eq!(address.get_as::<String>("city").map(String::as_str), Some("X"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use expando_reflect as reflect;
