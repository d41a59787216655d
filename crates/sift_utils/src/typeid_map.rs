use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

/// A map from [`TypeId`] to `V`.
///
/// A `TypeId` is a hash already, so keys go through [`NoOpHashState`]
/// unchanged.
///
/// ```
/// use sift_utils::TypeIdMap;
///
/// let mut names = TypeIdMap::new();
/// names.insert_type::<u8>("byte");
/// names.insert_type::<String>("text");
///
/// assert_eq!(names.get_type::<u8>(), Some(&"byte"));
/// assert!(!names.contains_type::<u16>());
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.0.get(&TypeId::of::<T>())
    }

    /// Inserts `value` for `type_id`, returning the value it replaces.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    #[inline]
    pub fn insert_type<T: ?Sized + 'static>(&mut self, value: V) -> Option<V> {
        self.0.insert(TypeId::of::<T>(), value)
    }

    /// Returns the value for `type_id`, inserting `init()` first if there is none.
    pub fn get_or_insert(&mut self, type_id: TypeId, init: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(init)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.0.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.0.iter()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<V> Extend<(TypeId, V)> for TypeIdMap<V> {
    fn extend<I: IntoIterator<Item = (TypeId, V)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
