//! A small, serialization-oriented reflection layer.
//!
//! Types describe themselves through [`Typed`](info::Typed) (static type
//! information, available without an instance) and [`Reflect`] (a dynamic view
//! over an instance). Most types get both from [`derive::Reflect`].
//!
//! ```
//! use sift_reflect::{Reflect, derive::Reflect, info::Typed, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! struct Menu {
//!     name: String,
//!     children: Vec<Menu>,
//! }
//!
//! let info = Menu::type_info().as_struct().unwrap();
//! assert_eq!(info.field_at(1).unwrap().name(), "children");
//!
//! let menu = Menu { name: "m1".into(), children: vec![] };
//! let ReflectRef::Struct(value) = menu.reflect_ref() else { unreachable!() };
//! assert_eq!(value.field_len(), 2);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::sift_reflect` paths; this alias lets the crate
// derive for its own types and tests.
extern crate self as sift_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use sift_reflect_derive as derive;
