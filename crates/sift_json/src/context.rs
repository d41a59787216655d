use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock};
use std::time::SystemTime;

use sift_reflect::Reflect;
use sift_utils::TypeIdMap;

use crate::serializer::{BooleanSerializer, CharSerializer, DoubleSerializer, FloatSerializer};
use crate::serializer::{IntegerSerializer, OrdinalEnumSerializer, Serializer, StringSerializer};
use crate::serializer::{SystemTimeSerializer, ToQuotedStringSerializer, ToStringSerializer};

type SerializerMap = TypeIdMap<Arc<dyn Serializer>>;

// -----------------------------------------------------------------------------
// Seed table

fn insert<T: Reflect>(map: &mut SerializerMap, serializer: &Arc<dyn Serializer>) {
    map.insert_type::<T>(serializer.clone());
}

fn defaults() -> &'static SerializerMap {
    static DEFAULTS: LazyLock<SerializerMap> = LazyLock::new(|| {
        let integer: Arc<dyn Serializer> = Arc::new(IntegerSerializer);
        let text: Arc<dyn Serializer> = Arc::new(ToStringSerializer);
        let string: Arc<dyn Serializer> = Arc::new(StringSerializer);

        let mut map = SerializerMap::with_capacity(32);
        insert::<i32>(&mut map, &integer);
        insert::<i64>(&mut map, &integer);
        insert::<isize>(&mut map, &integer);
        insert::<u32>(&mut map, &integer);
        insert::<u64>(&mut map, &integer);
        insert::<usize>(&mut map, &integer);
        insert::<i8>(&mut map, &text);
        insert::<i16>(&mut map, &text);
        insert::<u8>(&mut map, &text);
        insert::<u16>(&mut map, &text);
        insert::<String>(&mut map, &string);
        insert::<&'static str>(&mut map, &string);
        insert::<Cow<'static, str>>(&mut map, &string);
        insert::<Box<str>>(&mut map, &string);
        insert::<Arc<str>>(&mut map, &string);
        map.insert_type::<f32>(Arc::new(FloatSerializer));
        map.insert_type::<f64>(Arc::new(DoubleSerializer));
        map.insert_type::<bool>(Arc::new(BooleanSerializer));
        map.insert_type::<char>(Arc::new(CharSerializer));
        map.insert_type::<SystemTime>(Arc::new(SystemTimeSerializer));
        map.insert_type::<PathBuf>(Arc::new(ToQuotedStringSerializer));

        #[cfg(feature = "chrono")]
        {
            use crate::serializer::{DateTimeSerializer, LocalDateSerializer};
            use crate::serializer::LocalDateTimeSerializer;
            use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

            let date_time: Arc<dyn Serializer> = Arc::new(DateTimeSerializer);
            insert::<DateTime<Utc>>(&mut map, &date_time);
            insert::<DateTime<Local>>(&mut map, &date_time);
            insert::<DateTime<FixedOffset>>(&mut map, &date_time);
            map.insert_type::<NaiveDateTime>(Arc::new(LocalDateTimeSerializer));
            map.insert_type::<NaiveDate>(Arc::new(LocalDateSerializer));
        }

        map
    });
    &DEFAULTS
}

static GLOBALS: RwLock<SerializerMap> = RwLock::new(TypeIdMap::new());

// -----------------------------------------------------------------------------
// SerializeContext

/// An immutable registry from concrete type to serializer, plus the enum
/// strategy.
///
/// Registered serializers always win over the structural choice a
/// [`Resolver`](crate::serializer::Resolver) would make. Registering returns
/// a new context and leaves `self` untouched; clones share their table.
///
/// ```
/// use sift_json::SerializeContext;
/// use sift_json::serializer::{NameEnumSerializer, ToQuotedStringSerializer};
///
/// let base = SerializeContext::new();
/// let quoted = base.register::<i64>(ToQuotedStringSerializer);
/// let named = quoted.with_enum_serializer(NameEnumSerializer);
///
/// assert!(base.contains::<i64>());
/// assert!(!SerializeContext::empty().contains::<i64>());
/// ```
#[derive(Clone)]
pub struct SerializeContext {
    serializers: Arc<SerializerMap>,
    enum_serializer: Arc<dyn Serializer>,
}

impl SerializeContext {
    /// Creates a context with the built-in serializers and every global
    /// registration made so far.
    ///
    /// | types | serializer |
    /// |---|---|
    /// | `i32`, `i64`, `isize`, `u32`, `u64`, `usize` | [`IntegerSerializer`] |
    /// | `i8`, `i16`, `u8`, `u16` | [`ToStringSerializer`] |
    /// | `f32` / `f64` | [`FloatSerializer`] / [`DoubleSerializer`] |
    /// | `bool` / `char` | [`BooleanSerializer`] / [`CharSerializer`] |
    /// | `String`, `&'static str`, `Cow<'static, str>`, `Box<str>`, `Arc<str>` | [`StringSerializer`] |
    /// | `SystemTime` | [`SystemTimeSerializer`] |
    /// | `PathBuf` | [`ToQuotedStringSerializer`] |
    /// | `chrono` `DateTime`, `NaiveDateTime`, `NaiveDate` | epoch milliseconds |
    ///
    /// Enums are written with [`OrdinalEnumSerializer`].
    pub fn new() -> Self {
        let mut serializers = defaults().clone();
        let globals = GLOBALS.read().unwrap_or_else(PoisonError::into_inner);
        serializers.extend(globals.iter().map(|(id, ser)| (*id, ser.clone())));
        Self {
            serializers: Arc::new(serializers),
            enum_serializer: Arc::new(OrdinalEnumSerializer),
        }
    }

    /// Creates a context without any registered serializer.
    pub fn empty() -> Self {
        Self {
            serializers: Arc::new(SerializerMap::new()),
            enum_serializer: Arc::new(OrdinalEnumSerializer),
        }
    }

    /// Returns a new context that writes `T` with `serializer`.
    #[inline]
    pub fn register<T: Reflect>(&self, serializer: impl Serializer) -> Self {
        self.register_id(TypeId::of::<T>(), Arc::new(serializer))
    }

    /// Returns a new context that writes the type `type_id` with `serializer`.
    pub fn register_id(&self, type_id: TypeId, serializer: Arc<dyn Serializer>) -> Self {
        let mut serializers = SerializerMap::clone(&self.serializers);
        serializers.insert(type_id, serializer);
        Self {
            serializers: Arc::new(serializers),
            enum_serializer: self.enum_serializer.clone(),
        }
    }

    /// Returns a new context that writes enums with `serializer`.
    pub fn with_enum_serializer(&self, serializer: impl Serializer) -> Self {
        Self {
            serializers: self.serializers.clone(),
            enum_serializer: Arc::new(serializer),
        }
    }

    /// Registers `serializer` for `T` in every context created by
    /// [`new`](Self::new) from now on.
    ///
    /// Existing contexts are not affected.
    pub fn register_global<T: Reflect>(serializer: impl Serializer) {
        GLOBALS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert_type::<T>(Arc::new(serializer));
    }

    /// Returns the serializer registered for `type_id`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&Arc<dyn Serializer>> {
        self.serializers.get(&type_id)
    }

    /// Returns `true` if a serializer is registered for `T`.
    #[inline]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.serializers.contains_type::<T>()
    }

    /// Returns the enum strategy.
    #[inline]
    pub fn enum_serializer(&self) -> &Arc<dyn Serializer> {
        &self.enum_serializer
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.serializers.len()
    }
}

impl Default for SerializeContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializeContext")
            .field("serializers", &self.serializers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use core::any::TypeId;

    use super::SerializeContext;
    use crate::serializer::{EmptySerializer, ToQuotedStringSerializer};

    #[test]
    fn register_copies() {
        let base = SerializeContext::new();
        let before = Arc::clone(base.get(TypeId::of::<i64>()).unwrap());

        let next = base.register::<i64>(ToQuotedStringSerializer);
        assert!(Arc::ptr_eq(base.get(TypeId::of::<i64>()).unwrap(), &before));
        assert!(!Arc::ptr_eq(next.get(TypeId::of::<i64>()).unwrap(), &before));
        assert_eq!(base.len(), next.len());
        assert!(next.contains::<String>());
    }

    #[test]
    fn globals_reach_new_contexts_only() {
        struct Marker;
        impl core::fmt::Display for Marker {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("marker")
            }
        }
        sift_reflect::impl_reflect_opaque!(Marker);

        let before = SerializeContext::new();
        SerializeContext::register_global::<Marker>(EmptySerializer);
        assert!(!before.contains::<Marker>());
        assert!(SerializeContext::new().contains::<Marker>());
        assert!(!SerializeContext::empty().contains::<Marker>());
    }
}
