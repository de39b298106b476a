//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// The type must implement `Clone`, reflected clones are built with it.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Person {
///     name: String,
///     address: Option<Address>,
/// }
/// ```
///
/// Enums, tuple structs and unit structs are treated as `Opaque`: their
/// inside is not visible and projection copies them as a single value.
/// Opaque types must also implement `PartialEq` and `Debug`.
///
/// ## Attributes
///
/// ### Opaque
///
/// Forces a struct with named fields to be treated as `Opaque`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, PartialEq, Debug)]
/// #[reflect(opaque)]
/// struct Money {
///     cents: i64,
///     currency: Currency,
/// }
/// ```
///
/// ### Serialize
///
/// Declares that the type implements `serde::Serialize`, the implementation is
/// then used when serializing the reflected value.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, PartialEq, Debug, Serialize)]
/// #[reflect(opaque, serialize)]
/// enum Currency { Eur, Usd }
/// ```
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(type_path = "shop::Money")]
/// struct Money { /* ... */ }
/// ```
///
/// The path does not include generics, they are appended.
///
/// ### Skipping Fields
///
/// A field marked `#[reflect(skip)]` is invisible to reflection, it does not
/// need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Session {
///     user: String,
///     #[reflect(skip)]
///     token: Secret,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters are bounded by `Reflect + Typed + Clone`. Lifetime and
/// const parameters are not supported.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}
