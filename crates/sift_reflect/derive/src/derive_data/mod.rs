//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_derive;
mod reflect_meta;
mod rename_rule;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use reflect_derive::{ReflectDerive, ReflectEnum, ReflectStruct};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use rename_rule::RenameRule;
