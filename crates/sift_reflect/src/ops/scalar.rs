use core::fmt;

/// A borrowed scalar value.
///
/// Integer widths are widened to the 64-bit (or 128-bit) variant of the same
/// signedness; every string-like type is exposed as [`ScalarRef::Str`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Char(char),
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    F32(f32),
    F64(f64),
    Str(&'a str),
}

impl ScalarRef<'_> {
    /// Returns `true` if the textual form of the scalar must be quoted in JSON.
    #[inline]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Char(_) | Self::Str(_))
    }
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::I128(v) => fmt::Display::fmt(v, f),
            Self::U128(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}
