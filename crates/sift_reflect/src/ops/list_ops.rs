use alloc::boxed::Box;

use crate::Reflect;

/// A boxed iterator over reflected elements.
pub type ReflectIter<'a> = Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>;

/// An ordered, homogeneous container: lists, sets and fixed-size arrays.
///
/// Elements are yielded in the container's own iteration order. The element
/// index is not a named position, so walkers treat elements as sitting at the
/// same position as the container itself.
pub trait List: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns an iterator over the elements.
    fn iter(&self) -> ReflectIter<'_>;

    /// Returns `true` if the container has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
