use crate::impls::macros::impl_reflect_scalar;
use crate::ops::ScalarRef;

impl_reflect_scalar! {
    bool => |v| ScalarRef::Bool(*v),
    char => |v| ScalarRef::Char(*v),
    i8 => |v| ScalarRef::I64(i64::from(*v)),
    i16 => |v| ScalarRef::I64(i64::from(*v)),
    i32 => |v| ScalarRef::I64(i64::from(*v)),
    i64 => |v| ScalarRef::I64(*v),
    isize => |v| ScalarRef::I64(*v as i64),
    i128 => |v| ScalarRef::I128(*v),
    u8 => |v| ScalarRef::U64(u64::from(*v)),
    u16 => |v| ScalarRef::U64(u64::from(*v)),
    u32 => |v| ScalarRef::U64(u64::from(*v)),
    u64 => |v| ScalarRef::U64(*v),
    usize => |v| ScalarRef::U64(*v as u64),
    u128 => |v| ScalarRef::U128(*v),
    f32 => |v| ScalarRef::F32(*v),
    f64 => |v| ScalarRef::F64(*v),
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{ReflectRef, ScalarRef};

    fn scalar(value: &dyn Reflect) -> ScalarRef<'_> {
        match value.reflect_ref() {
            ReflectRef::Scalar(s) => s,
            _ => panic!("not a scalar"),
        }
    }

    #[test]
    fn integers_widen_by_signedness() {
        assert_eq!(scalar(&-3_i8), ScalarRef::I64(-3));
        assert_eq!(scalar(&7_u16), ScalarRef::U64(7));
        assert_eq!(scalar(&usize::MAX), ScalarRef::U64(usize::MAX as u64));
        assert_eq!(scalar(&i128::MIN), ScalarRef::I128(i128::MIN));
    }

    #[test]
    fn scalar_display() {
        assert_eq!(scalar(&true).to_string(), "true");
        assert_eq!(scalar(&1.5_f64).to_string(), "1.5");
        assert_eq!(scalar(&'x').to_string(), "x");
        assert!(scalar(&'x').is_textual());
        assert!(!scalar(&0_u8).is_textual());
        assert_eq!(<f32 as Typed>::type_info().kind(), ReflectKind::Scalar);
    }
}
