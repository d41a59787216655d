use crate::info::ReflectKind;
use crate::ops::{Enum, List, Map, Opaque, ScalarRef, Struct};

/// An immutable, structural view over a reflected value.
///
/// Obtained through [`Reflect::reflect_ref`](crate::Reflect::reflect_ref).
pub enum ReflectRef<'a> {
    /// An absent value, such as `None`.
    Null,
    Scalar(ScalarRef<'a>),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn List),
    Map(&'a dyn Map),
    Enum(&'a dyn Enum),
    Opaque(&'a dyn Opaque),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of the view, or `None` for [`ReflectRef::Null`].
    pub fn kind(&self) -> Option<ReflectKind> {
        Some(match self {
            Self::Null => return None,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(_) => ReflectKind::Opaque,
        })
    }
}
