use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::impls::macros::impl_reflect_scalar;
use crate::ops::ScalarRef;

impl_reflect_scalar! {
    String => |v| ScalarRef::Str(v),
    &'static str => |v| ScalarRef::Str(v),
    Cow<'static, str> => |v| ScalarRef::Str(v),
    Box<str> => |v| ScalarRef::Str(v),
    Arc<str> => |v| ScalarRef::Str(v),
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::{ReflectRef, ScalarRef};

    #[test]
    fn every_string_type_is_a_str_scalar() {
        let values: [&dyn Reflect; 4] = [
            &"abc",
            &String::from("abc"),
            &Cow::<'static, str>::Borrowed("abc"),
            &Arc::<str>::from("abc"),
        ];
        for value in values {
            assert!(matches!(
                value.reflect_ref(),
                ReflectRef::Scalar(ScalarRef::Str("abc"))
            ));
        }
    }
}
