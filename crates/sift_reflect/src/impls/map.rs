use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::Any;
use core::hash::BuildHasher;
use std::collections::HashMap;

use sift_utils::hash::hashbrown;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapIter, ReflectRef};

macro_rules! impl_reflect_map {
    ($ty:ty, [$($generics:tt)*]) => {
        impl<$($generics)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<$($generics)*> Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static TypeInfo {
                <Self as Typed>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            #[inline]
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl<$($generics)*> Map for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    <$ty>::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
                )
            }
        }
    };
}

impl_reflect_map!(BTreeMap<K, V>, [K: Reflect + Typed, V: Reflect + Typed]);
impl_reflect_map!(
    HashMap<K, V, S>,
    [K: Reflect + Typed, V: Reflect + Typed, S: BuildHasher + Send + Sync + 'static]
);
impl_reflect_map!(
    hashbrown::HashMap<K, V, S>,
    [K: Reflect + Typed, V: Reflect + Typed, S: BuildHasher + Send + Sync + 'static]
);
