use alloc::string::String;
use alloc::vec::Vec;

use crate::serializer::{NameEnumSerializer, OrdinalEnumSerializer};
use crate::{JsonSerializer, PatternError, SerializeContext};

/// How enum values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EnumFormat {
    /// The zero-based position of the variant, see [`OrdinalEnumSerializer`].
    #[default]
    Ordinal,
    /// The quoted variant name, see [`NameEnumSerializer`].
    Name,
}

/// The configuration of a [`JsonSerializer`] as plain data.
///
/// With the `serde` feature it can be read from configuration files:
///
/// ```toml
/// patterns = ["name", "children.name"]
/// enum_format = "name"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SerializerOptions {
    pub patterns: Vec<String>,
    pub enum_format: EnumFormat,
}

impl SerializerOptions {
    /// Creates a serializer with the default context.
    #[inline]
    pub fn build(&self) -> Result<JsonSerializer, PatternError> {
        self.build_with(SerializeContext::new())
    }

    /// Creates a serializer over `context`, replacing its enum strategy.
    pub fn build_with(&self, context: SerializeContext) -> Result<JsonSerializer, PatternError> {
        let context = match self.enum_format {
            EnumFormat::Ordinal => context.with_enum_serializer(OrdinalEnumSerializer),
            EnumFormat::Name => context.with_enum_serializer(NameEnumSerializer),
        };
        JsonSerializer::with_context(context, &self.patterns)
    }
}

#[cfg(test)]
mod tests {
    use sift_reflect::derive::Reflect;

    use super::{EnumFormat, SerializerOptions};

    #[derive(Reflect)]
    enum Shape {
        Circle,
        Square,
    }

    #[test]
    fn enum_format_applies() {
        let mut options = SerializerOptions {
            patterns: vec!["*".into()],
            ..Default::default()
        };
        let values = vec![Shape::Square, Shape::Circle];
        assert_eq!(options.build().unwrap().stringify(&values).unwrap(), "[1,0]");

        options.enum_format = EnumFormat::Name;
        assert_eq!(
            options.build().unwrap().stringify(&values).unwrap(),
            r#"["Square","Circle"]"#
        );

        options.patterns.push("(".into());
        assert!(options.build().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize() {
        let options: SerializerOptions =
            serde_json::from_str(r#"{"patterns":["name"],"enum_format":"name"}"#).unwrap();
        assert_eq!(options.patterns, ["name"]);
        assert_eq!(options.enum_format, EnumFormat::Name);

        let options: SerializerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SerializerOptions::default());
        assert!(serde_json::from_str::<SerializerOptions>(r#"{"other":1}"#).is_err());
    }
}
