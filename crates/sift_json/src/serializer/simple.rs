use alloc::sync::Arc;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use sift_reflect::Reflect;
use sift_reflect::ops::{ReflectRef, ScalarRef, key_text};

use crate::serializer::Serializer;
use crate::{Output, SerializeError};

#[inline]
fn scalar(value: &dyn Reflect) -> Option<ScalarRef<'_>> {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => Some(scalar),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Scalars

/// Writes integers as JSON numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSerializer;

impl Serializer for IntegerSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        match scalar(value) {
            Some(ScalarRef::I64(v)) => output.write_i64(v)?,
            Some(ScalarRef::U64(v)) => output.write_u64(v)?,
            Some(ScalarRef::I128(v)) => output.write_i128(v)?,
            Some(ScalarRef::U128(v)) => output.write_u128(v)?,
            _ => return Err(SerializeError::mismatch("an integer", value)),
        }
        Ok(())
    }
}

/// Writes `f32` values; non-finite values become `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatSerializer;

impl Serializer for FloatSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let Some(ScalarRef::F32(v)) = scalar(value) else {
            return Err(SerializeError::mismatch("an f32", value));
        };
        if !v.is_finite() {
            log::warn!("non-finite float {v} written as null");
        }
        output.write_f32(v)?;
        Ok(())
    }
}

/// Writes `f64` (and `f32`) values; non-finite values become `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSerializer;

impl Serializer for DoubleSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let v = match scalar(value) {
            Some(ScalarRef::F64(v)) => v,
            Some(ScalarRef::F32(v)) => f64::from(v),
            _ => return Err(SerializeError::mismatch("a float", value)),
        };
        if !v.is_finite() {
            log::warn!("non-finite float {v} written as null");
        }
        output.write_f64(v)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSerializer;

impl Serializer for BooleanSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let Some(ScalarRef::Bool(v)) = scalar(value) else {
            return Err(SerializeError::mismatch("a bool", value));
        };
        output.write_bool(v)?;
        Ok(())
    }
}

/// Writes a `char` as a one-character string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSerializer;

impl Serializer for CharSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let Some(ScalarRef::Char(v)) = scalar(value) else {
            return Err(SerializeError::mismatch("a char", value));
        };
        output.write_char(v)?;
        Ok(())
    }
}

/// Writes strings, quoted and escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl Serializer for StringSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let Some(ScalarRef::Str(v)) = scalar(value) else {
            return Err(SerializeError::mismatch("a string", value));
        };
        output.write_quoted(v)?;
        Ok(())
    }
}

/// Writes any scalar in its natural JSON form.
///
/// Used for scalar types without a registered serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarSerializer;

impl Serializer for ScalarSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        match scalar(value) {
            Some(ScalarRef::Bool(v)) => output.write_bool(v)?,
            Some(ScalarRef::Char(v)) => output.write_char(v)?,
            Some(ScalarRef::I64(v)) => output.write_i64(v)?,
            Some(ScalarRef::U64(v)) => output.write_u64(v)?,
            Some(ScalarRef::I128(v)) => output.write_i128(v)?,
            Some(ScalarRef::U128(v)) => output.write_u128(v)?,
            Some(ScalarRef::F32(v)) => output.write_f32(v)?,
            Some(ScalarRef::F64(v)) => output.write_f64(v)?,
            Some(ScalarRef::Str(v)) => output.write_quoted(v)?,
            None => return Err(SerializeError::mismatch("a scalar", value)),
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Text

/// Writes the textual form of a value, unquoted.
///
/// Meant for numbers; the text is not escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToStringSerializer;

impl Serializer for ToStringSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let text = key_text(value).ok_or_else(|| SerializeError::mismatch("a textual value", value))?;
        output.write_raw(&text)?;
        Ok(())
    }
}

/// Writes the textual form of a value as a quoted, escaped string.
///
/// Used for opaque types without a registered serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToQuotedStringSerializer;

impl Serializer for ToQuotedStringSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let text = key_text(value).ok_or_else(|| SerializeError::mismatch("a textual value", value))?;
        output.write_quoted(&text)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Time

/// Writes a [`SystemTime`] as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSerializer;

impl Serializer for SystemTimeSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let time = value
            .downcast_ref::<SystemTime>()
            .ok_or_else(|| SerializeError::mismatch("a SystemTime", value))?;
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i128::try_from(after.as_millis()).unwrap_or(i128::MAX),
            Err(before) => -i128::try_from(before.duration().as_millis()).unwrap_or(i128::MAX),
        };
        output.write_i128(millis)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Empty

/// The serializer of values that are cut off: it writes nothing, and
/// reports itself empty so the field or element is left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySerializer;

impl EmptySerializer {
    /// Returns the shared instance.
    pub fn shared() -> Arc<dyn Serializer> {
        static SHARED: LazyLock<Arc<dyn Serializer>> = LazyLock::new(|| Arc::new(EmptySerializer));
        SHARED.clone()
    }
}

impl Serializer for EmptySerializer {
    #[inline]
    fn write(&self, _: &mut dyn Output, _: &dyn Reflect) -> Result<(), SerializeError> {
        Ok(())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }
}
