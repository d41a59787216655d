use core::fmt;

use crate::Reflect;

/// A value whose only reflected form is text.
///
/// Usually implemented through `Display`, see
/// [`impl_reflect_opaque`](crate::impl_reflect_opaque).
pub trait Opaque: Reflect {
    /// Formats the textual form of the value.
    fn opaque_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl fmt::Display for dyn Opaque + '_ {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.opaque_fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectRef;

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Version(u16, u16);

    impl fmt::Display for Version {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}.{}", self.0, self.1)
        }
    }

    #[derive(Reflect)]
    #[reflect(opaque, number)]
    struct Amount(i64);

    impl fmt::Display for Amount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
        }
    }

    struct Ratio(u32, u32);

    impl fmt::Display for Ratio {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", f64::from(self.0) / f64::from(self.1))
        }
    }

    crate::impl_reflect_opaque!(number: Ratio);

    #[test]
    fn numeric_marker() {
        assert!(!Version::type_info().as_opaque().unwrap().is_numeric());
        assert!(Amount::type_info().as_opaque().unwrap().is_numeric());
        assert!(Ratio::type_info().as_opaque().unwrap().is_numeric());
        assert!(!std::net::Ipv4Addr::type_info().as_opaque().unwrap().is_numeric());

        let ReflectRef::Opaque(value) = Ratio(1, 4).reflect_ref() else {
            panic!("not opaque");
        };
        assert_eq!(value.to_string(), "0.25");
    }

    #[test]
    fn opaque_derive_uses_display() {
        assert_eq!(Version::type_info().kind(), ReflectKind::Opaque);
        let ReflectRef::Opaque(value) = Version(1, 4).reflect_ref() else {
            panic!("not opaque");
        };
        assert_eq!(value.to_string(), "1.4");
    }
}
