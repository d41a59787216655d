use sift_reflect::Reflect;
use sift_reflect::ops::ReflectRef;

use crate::serializer::Serializer;
use crate::{Output, SerializeError};

/// Writes an enum value as the zero-based position of its variant.
///
/// The default enum strategy of a [`SerializeContext`](crate::SerializeContext).
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalEnumSerializer;

impl Serializer for OrdinalEnumSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let ReflectRef::Enum(value) = value.reflect_ref() else {
            return Err(SerializeError::mismatch("an enum", value));
        };
        output.write_u64(value.variant_index() as u64)?;
        Ok(())
    }
}

/// Writes an enum value as the quoted name of its variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameEnumSerializer;

impl Serializer for NameEnumSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let ReflectRef::Enum(value) = value.reflect_ref() else {
            return Err(SerializeError::mismatch("an enum", value));
        };
        output.write_quoted(value.variant_name())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sift_reflect::derive::Reflect;

    use super::{NameEnumSerializer, OrdinalEnumSerializer};
    use crate::serializer::Serializer;
    use crate::{Output, StringOutput};

    #[derive(Reflect)]
    enum Status {
        Draft,
        Published,
    }

    #[test]
    fn ordinal_and_name() {
        let mut out = StringOutput::new();
        OrdinalEnumSerializer.write(&mut out, &Status::Published).unwrap();
        out.item_separator().unwrap();
        NameEnumSerializer.write(&mut out, &Status::Draft).unwrap();
        assert_eq!(out.as_str(), r#"1,"Draft""#);
        assert!(OrdinalEnumSerializer.write(&mut out, &1_u8).is_err());
    }
}
