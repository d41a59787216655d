use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, TypeInfo, Typed};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// dyn Reflect

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<dyn Reflect>()))
    }
}

// -----------------------------------------------------------------------------
// Option

// `Option<T>` is described by `T`; only the value tells `Some` from `None`.
impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        match self {
            Some(value) => value.reflect_type_info(),
            None => T::type_info(),
        }
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Null,
        }
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        match self {
            Some(value) => value.as_any(),
            None => self,
        }
    }
}

// -----------------------------------------------------------------------------
// Box / Arc

macro_rules! impl_reflect_pointer {
    ($($ptr:ident),+) => {$(
        impl<T: Typed + ?Sized> Typed for $ptr<T> {
            #[inline]
            fn type_info() -> &'static TypeInfo {
                T::type_info()
            }
        }

        impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
            #[inline]
            fn reflect_type_info(&self) -> &'static TypeInfo {
                (**self).reflect_type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                (**self).reflect_ref()
            }

            #[inline]
            fn as_any(&self) -> &dyn Any {
                (**self).as_any()
            }
        }
    )+};
}

impl_reflect_pointer!(Box, Arc);
