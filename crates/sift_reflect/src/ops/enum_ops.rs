use crate::Reflect;

/// A reflected enum value.
pub trait Enum: Reflect {
    /// Returns the zero-based position of the active variant among the declared variants.
    fn variant_index(&self) -> usize;

    /// Returns the name of the active variant.
    fn variant_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::ops::{ReflectRef, key_text};

    #[derive(Reflect)]
    #[reflect(rename_all = "lowercase")]
    enum Level {
        Low,
        #[reflect(rename = "MID")]
        Middle,
        High,
    }

    #[test]
    fn variants_report_ordinal_and_name() {
        let ReflectRef::Enum(value) = Level::High.reflect_ref() else {
            panic!("not an enum");
        };
        assert_eq!(value.variant_index(), 2);
        assert_eq!(value.variant_name(), "high");
        assert_eq!(key_text(&Level::Middle).as_deref(), Some("MID"));
        assert_eq!(key_text(&Level::Low).as_deref(), Some("low"));
    }
}
