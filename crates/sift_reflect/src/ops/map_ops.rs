use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::ops::ReflectRef;

/// A boxed iterator over reflected key/value pairs.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A key/value container.
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the entries, in the container's iteration order.
    fn iter(&self) -> MapIter<'_>;

    /// Returns `true` if the container has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Converts a map key to its textual form.
///
/// Scalars, opaque values and enums (by variant name) have a textual form.
/// Absent keys and composite keys do not, and yield `None`.
///
/// ```
/// use sift_reflect::ops::key_text;
///
/// assert_eq!(key_text(&1_i32).as_deref(), Some("1"));
/// assert_eq!(key_text(&"a").as_deref(), Some("a"));
/// assert_eq!(key_text(&None::<i32>), None);
/// assert_eq!(key_text(&vec![1_u8]), None);
/// ```
pub fn key_text(key: &dyn Reflect) -> Option<String> {
    match key.reflect_ref() {
        ReflectRef::Scalar(scalar) => Some(scalar.to_string()),
        ReflectRef::Opaque(opaque) => Some(opaque.to_string()),
        ReflectRef::Enum(value) => Some(value.variant_name().into()),
        _ => None,
    }
}
