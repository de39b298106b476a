//! Items referenced by code generated from `#[derive(Reflect)]`.
//!
//! Not public API.

pub use alloc::boxed::Box;
pub use alloc::string::String;
pub use core::fmt;
pub use erased_serde;
