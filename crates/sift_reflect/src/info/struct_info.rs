use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use sift_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    // This also keeps recursive types (`children: Vec<Self>`) constructible.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId` of the declared field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the declared field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the value the field holds.
    ///
    /// Transparent wrappers are looked through: for a field declared as
    /// `Option<Box<Menu>>` this is the information of `Menu`.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// Type information for structs with named fields.
///
/// Fields are kept in declaration order; field `i` of the info is read with
/// [`Struct::field_at(i)`](crate::ops::Struct::field_at).
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    /// Creates a new [`StructInfo`] describing `T`.
    pub fn new<T: Any>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns all fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the field called `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the index of the field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
