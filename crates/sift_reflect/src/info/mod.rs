//! Compile-time type information.
//!
//! - [`TypeInfo`]: the per-type description, one variant per [`ReflectKind`].
//! - [`Typed`]: static accessor to a type's [`TypeInfo`].
//! - [`StructInfo`] / [`NamedField`]: ordered field list of a struct.
//! - [`EnumInfo`]: ordered variant names of an enum.

// -----------------------------------------------------------------------------
// Modules

mod container_info;
mod enum_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use container_info::{ArrayInfo, DynamicInfo, ListInfo, MapInfo, OpaqueInfo, ScalarInfo};
pub use enum_info::EnumInfo;
pub use struct_info::{NamedField, StructInfo};
pub use type_info::{ReflectKind, ReflectKindError, Type, TypeInfo};
pub use typed::Typed;
