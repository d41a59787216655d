//! Derive macro for `sift_reflect`.
//!
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

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed` and `Reflect`, plus:
///
/// - `Struct` for `struct T { ... }` and unit structs (`struct T;`, no fields)
/// - `Enum` for enums whose variants are all unit variants
/// - `Opaque` for types marked `#[reflect(opaque)]`
///
/// Tuple structs and enums with data-carrying variants are rejected; mark them
/// `opaque` to reflect them through `Display`.
///
/// ## Type attributes
///
/// - `#[reflect(opaque)]`: reflect the type as text, through its `Display` impl.
/// - `#[reflect(opaque, number)]`: as `opaque`, for types whose text is a
///   number (decimals, big integers). Their text is written without quotes.
/// - `#[reflect(rename_all = "...")]`: rename every field (or variant).
///   Accepted values are `camelCase`, `snake_case`, `PascalCase`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase` and `UPPERCASE`.
///
/// ## Field and variant attributes
///
/// - `#[reflect(rename = "name")]`: reflected name, takes precedence over `rename_all`.
/// - `#[reflect(skip)]`: leave the field out of the reflected struct (fields only).
///
/// ## Generics
///
/// Every type parameter receives a `Reflect + Typed` bound. Lifetime
/// parameters are rejected, reflected types are `'static`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "camelCase")]
/// struct Menu {
///     menu_name: String,
///     #[reflect(skip)]
///     cached: u64,
///     parent: Option<Box<Menu>>,
///     children: Vec<Menu>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::reflect_impls(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
