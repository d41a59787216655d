/// Implements [`Typed`](crate::info::Typed), [`Reflect`](crate::Reflect) and
/// [`Opaque`](crate::ops::Opaque) for types whose only reflected form is text.
///
/// The text comes from `Display` by default. The `=>` form supplies a custom
/// formatter instead. The `number:` form marks types whose text is a JSON
/// number, see [`OpaqueInfo::is_numeric`](crate::info::OpaqueInfo::is_numeric).
///
/// ```
/// use core::fmt;
/// use sift_reflect::{Reflect, impl_reflect_opaque, ops::ReflectRef};
///
/// struct Version(u32, u32);
///
/// impl fmt::Display for Version {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "v{}.{}", self.0, self.1)
///     }
/// }
///
/// struct Token(u64);
///
/// struct Cents(i64);
///
/// impl fmt::Display for Cents {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
///     }
/// }
///
/// impl_reflect_opaque!(Version);
/// impl_reflect_opaque!(Token => |v, f| write!(f, "#{:x}", v.0));
/// impl_reflect_opaque!(number: Cents);
///
/// let info = Cents(1250).reflect_type_info().as_opaque().unwrap();
/// assert!(info.is_numeric());
/// assert!(!Version(1, 2).reflect_type_info().as_opaque().unwrap().is_numeric());
///
/// let ReflectRef::Opaque(v) = Version(1, 2).reflect_ref() else { unreachable!() };
/// assert_eq!(v.to_string(), "v1.2");
/// let ReflectRef::Opaque(t) = Token(255).reflect_ref() else { unreachable!() };
/// assert_eq!(t.to_string(), "#ff");
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@impl $numeric:literal, $ty:ty => |$v:ident, $f:ident| $body:expr) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque(
                        $crate::info::OpaqueInfo::new::<Self>().with_numeric($numeric),
                    )
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                <Self as $crate::info::Typed>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }

        impl $crate::ops::Opaque for $ty {
            fn opaque_fmt(&self, $f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let $v = self;
                $body
            }
        }
    };
    (number: $($ty:ty),+ $(,)?) => {
        $(
            $crate::impl_reflect_opaque!(@impl true, $ty => |v, f| ::core::fmt::Display::fmt(v, f));
        )+
    };
    ($ty:ty => |$v:ident, $f:ident| $body:expr) => {
        $crate::impl_reflect_opaque!(@impl false, $ty => |$v, $f| $body);
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::impl_reflect_opaque!($ty => |v, f| ::core::fmt::Display::fmt(v, f));
        )+
    };
}

// Scalars, one `ScalarRef` conversion per type.
macro_rules! impl_reflect_scalar {
    ($($ty:ty => |$v:ident| $conv:expr),+ $(,)?) => {
        $(
            impl $crate::info::Typed for $ty {
                fn type_info() -> &'static $crate::info::TypeInfo {
                    static CELL: $crate::impls::NonGenericTypeInfoCell =
                        $crate::impls::NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| {
                        $crate::info::TypeInfo::Scalar($crate::info::ScalarInfo::new::<Self>())
                    })
                }
            }

            impl $crate::Reflect for $ty {
                #[inline]
                fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                    <Self as $crate::info::Typed>::type_info()
                }

                #[inline]
                fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                    let $v = self;
                    $crate::ops::ReflectRef::Scalar($conv)
                }

                #[inline]
                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }
            }
        )+
    };
}

pub(super) use impl_reflect_scalar;
