use core::any::{Any, TypeId};

use crate::info::TypeInfo;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of the reflection layer.
///
/// A `Reflect` value can report its concrete type ([`reflect_type_info`]) and
/// expose its structure ([`reflect_ref`]) without the caller knowing the type at
/// compile time.
///
/// It's strongly recommended to use [the derive macro](crate::derive::Reflect)
/// rather than implementing this trait manually.
///
/// # Wrappers
///
/// `Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Reflect>` and `Arc<dyn Reflect>`
/// are transparent: every method forwards to the wrapped value, and `None` is
/// reported as [`ReflectRef::Null`].
///
/// ```
/// use sift_reflect::{Reflect, ops::ReflectRef};
///
/// let x: Box<dyn Reflect> = Box::new(32_i32);
/// assert!(x.reflect_type_info().type_is::<i32>());
/// assert_eq!(x.downcast_ref::<i32>(), Some(&32));
///
/// let none: Option<i32> = None;
/// assert!(none.is_null());
/// assert!(matches!(Some(1_u8).reflect_ref(), ReflectRef::Scalar(_)));
/// ```
///
/// [`reflect_type_info`]: Reflect::reflect_type_info
/// [`reflect_ref`]: Reflect::reflect_ref
pub trait Reflect: Any + Send + Sync {
    /// Returns the [`TypeInfo`] of the concrete value.
    fn reflect_type_info(&self) -> &'static TypeInfo;

    /// Returns a structural view of the value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Casts the concrete value to [`Any`], looking through transparent wrappers.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if the value represents an absent value (`None`).
    #[inline]
    fn is_null(&self) -> bool {
        matches!(self.reflect_ref(), ReflectRef::Null)
    }

    /// Returns the `TypeId` of the concrete value.
    ///
    /// Unlike [`Any::type_id`] on a `Box<dyn Reflect>`, this is the id of the
    /// boxed value, not of the box.
    #[inline]
    fn ty_id(&self) -> TypeId {
        self.reflect_type_info().type_id()
    }
}

impl dyn Reflect {
    /// Returns `true` if the concrete value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts the concrete value to `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_name())
    }
}
