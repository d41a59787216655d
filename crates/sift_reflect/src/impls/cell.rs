//! Containers for static storage of type information.
//!
//! Used to implement [`Typed`](crate::info::Typed):
//! - [`NonGenericTypeInfoCell`] for non-generic types, a thin [`OnceLock`].
//! - [`GenericTypeInfoCell`] for generic types. A `static CELL` inside a generic
//!   function is shared by every instantiation, so the cell keeps one entry
//!   per `TypeId`.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use sift_utils::TypeIdMap;

use crate::info::TypeInfo;

/// Container for static storage of non-generic type information.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`], creating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// ```
/// use sift_reflect::impls::GenericTypeInfoCell;
/// use sift_reflect::info::{ListInfo, TypeInfo, Typed};
///
/// struct Wrapper<T>(Vec<T>);
///
/// impl<T: Typed> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
///
/// assert!(Wrapper::<u8>::type_info().type_is::<Wrapper<u8>>());
/// assert!(Wrapper::<u16>::type_info().type_is::<Wrapper<u16>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the [`TypeInfo`] stored for `G`, creating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            // `f` may recurse into other cells (`Vec<Vec<T>>`), so it runs
            // before the write lock is taken.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
