//! Utilities for implementing the reflection traits, and the built-in impls.
//!
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//! - [`struct_debug`], [`struct_partial_eq`], [`option_partial_eq`]: shared
//!   bodies of [`Reflect`] methods.
//!
//! ## Implemented Menu
//!
//! - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `String`, `&'static str`, `Cow<'static, str>`
//! - `core::time::Duration`
//! - `Option<T>`
//!
//! [`Reflect`]: crate::Reflect
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;
mod option;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use common::{option_partial_eq, struct_debug, struct_partial_eq};

/// Concatenates string slices into one allocation.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use expando_reflect::impls;
///
/// let s = impls::concat(&["demo", "::", "Pair", "<", "u8", ">"]);
///
/// assert_eq!(s, "demo::Pair<u8>");
/// assert_eq!(s.capacity(), 14);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
