use alloc::boxed::Box;
use core::any::Any;

use crate::info::Type;

/// Type information for enums.
///
/// Variants are kept in declaration order; a variant's ordinal is its index
/// in [`variant_names`](EnumInfo::variant_names).
///
/// # Examples
///
/// ```
/// use sift_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Color { Red, Green, Blue }
///
/// let info = Color::type_info().as_enum().unwrap();
/// assert_eq!(info.variant_len(), 3);
/// assert_eq!(info.index_of("Blue"), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[&'static str]>,
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`] describing `T`.
    pub fn new<T: Any>(variants: &[&'static str]) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants: variants.into(),
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the variant names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variants
    }

    /// Returns the name of the variant at `index`.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&'static str> {
        self.variants.get(index).copied()
    }

    /// Returns the ordinal of the variant called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| *v == name)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}
