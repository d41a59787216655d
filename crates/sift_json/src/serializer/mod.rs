//! Serializers: terminal writers for single values and the composite,
//! path-aware writers that recurse through containers and structs.
//!
//! Composite serializers share a [`Resolver`], which picks (and caches) the
//! serializer for a type at a position.

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod enums;
mod iter;
mod list;
mod map;
mod object;
mod resolver;
mod simple;

#[cfg(feature = "chrono")]
mod datetime;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic::DynamicSerializer;
pub use enums::{NameEnumSerializer, OrdinalEnumSerializer};
pub use list::{ArraySerializer, ListSerializer};
pub use map::MapSerializer;
pub use object::ObjectSerializer;
pub use resolver::Resolver;
pub use simple::{BooleanSerializer, CharSerializer, DoubleSerializer, EmptySerializer};
pub use simple::{FloatSerializer, IntegerSerializer, ScalarSerializer, StringSerializer};
pub use simple::{SystemTimeSerializer, ToQuotedStringSerializer, ToStringSerializer};

#[cfg(feature = "chrono")]
pub use datetime::{DateTimeSerializer, LocalDateSerializer, LocalDateTimeSerializer};

use sift_reflect::Reflect;

use crate::{Output, SerializeError};

// -----------------------------------------------------------------------------
// Serializer

/// Writes one value to an [`Output`].
///
/// Serializers are shared between threads and between serializer trees, so
/// they hold no per-call state.
///
/// ```
/// use sift_json::{JsonSerializer, Output, SerializeError, Serializer};
/// use sift_reflect::Reflect;
///
/// struct Cents;
///
/// impl Serializer for Cents {
///     fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
///         let cents = value
///             .downcast_ref::<u64>()
///             .ok_or(SerializeError::custom("expected u64"))?;
///         output.write_quoted(&format!("{}.{:02}", cents / 100, cents % 100))?;
///         Ok(())
///     }
/// }
///
/// let json = JsonSerializer::builder().register::<u64>(Cents).build().unwrap();
/// assert_eq!(json.stringify(&1234_u64).unwrap(), r#""12.34""#);
/// ```
pub trait Serializer: Send + Sync + 'static {
    /// Writes `value`. `value` is never null.
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError>;

    /// Returns `true` if the serializer never writes anything.
    ///
    /// Callers leave out the field or element entirely, so no key or
    /// separator is written for it.
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if nothing would be written for `value`.
    ///
    /// Differs from [`is_empty`](Serializer::is_empty) only for serializers
    /// that pick their output from the runtime type of the value.
    #[inline]
    fn is_empty_for(&self, value: &dyn Reflect) -> bool {
        let _ = value;
        self.is_empty()
    }
}

impl<S: Serializer + ?Sized> Serializer for alloc::sync::Arc<S> {
    #[inline]
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        S::write(self, output, value)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        S::is_empty(self)
    }

    #[inline]
    fn is_empty_for(&self, value: &dyn Reflect) -> bool {
        S::is_empty_for(self, value)
    }
}
