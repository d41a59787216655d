use core::any::{Any, TypeId};
use core::{error, fmt};

use crate::info::{ArrayInfo, DynamicInfo, ListInfo, MapInfo, OpaqueInfo, ScalarInfo};
use crate::info::{EnumInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the structural "kinds" of a reflected type.
///
/// The kind decides how a value is walked: scalars and opaque values are
/// terminal, structs, lists, arrays and maps contain other reflected values.
/// `Dynamic` marks a type-erased slot (`Box<dyn Reflect>`) whose concrete type
/// is only known from an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Struct,
    List,
    Array,
    Map,
    Enum,
    Opaque,
    Dynamic,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Enum => f.pad("Enum"),
            Self::Opaque => f.pad("Opaque"),
            Self::Dynamic => f.pad("Dynamic"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// Type

/// The identity of a concrete type: its [`TypeId`] and its name.
#[derive(Debug, Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name, as given by [`core::any::type_name`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// A `TypeInfo` is usually obtained through [`Typed::type_info`] when the type is
/// known statically, or through [`Reflect::reflect_type_info`] from a value.
/// Both return a `'static` reference, so the address of a `TypeInfo` is stable
/// and it can be kept inside long-lived structures such as serializer caches.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`Reflect::reflect_type_info`]: crate::Reflect::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Enum(EnumInfo),
    Opaque(OpaqueInfo),
    Dynamic(DynamicInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] of this type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(_) => ReflectKind::Opaque,
            Self::Dynamic(_) => ReflectKind::Dynamic,
        }
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full name of the described type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any + ?Sized>(&self) -> bool {
        self.ty().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::{ReflectKind, TypeInfo};
    use crate::info::Typed;

    #[test]
    fn cast_reports_both_kinds() {
        let info: &TypeInfo = <i32 as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Scalar);
        assert!(info.type_is::<i32>());

        let err = info.as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Scalar);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Scalar"
        );
    }

    #[test]
    fn type_info_is_static_per_type() {
        let a = <Vec<u8> as Typed>::type_info();
        let b = <Vec<u8> as Typed>::type_info();
        let c = <Vec<u16> as Typed>::type_info();
        assert!(core::ptr::eq(a, b));
        assert!(!core::ptr::eq(a, c));
        assert_eq!(a.kind(), ReflectKind::List);
    }
}
