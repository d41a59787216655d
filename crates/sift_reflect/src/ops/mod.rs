//! Structural views over reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) returns a [`ReflectRef`],
//! one variant per structural kind, each carrying the trait that walks it.

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod list_ops;
mod map_ops;
mod opaque_ops;
mod reflect_ref;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::Enum;
pub use list_ops::{List, ReflectIter};
pub use map_ops::{Map, MapIter, key_text};
pub use opaque_ops::Opaque;
pub use reflect_ref::ReflectRef;
pub use scalar::ScalarRef;
pub use struct_ops::Struct;
