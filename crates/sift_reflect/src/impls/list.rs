use alloc::boxed::Box;
use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::any::Any;
use core::hash::BuildHasher;
use std::collections::HashSet;

use sift_utils::hash::hashbrown;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, ListInfo, TypeInfo, Typed};
use crate::ops::{List, ReflectIter, ReflectRef};

macro_rules! impl_reflect_list {
    ($ty:ty, [$($generics:tt)*]) => {
        impl<$($generics)*> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<$($generics)*> Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static TypeInfo {
                <Self as Typed>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }

            #[inline]
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl<$($generics)*> List for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> ReflectIter<'_> {
                Box::new(<&$ty as IntoIterator>::into_iter(self).map(|item| item as &dyn Reflect))
            }
        }
    };
}

impl_reflect_list!(Vec<T>, [T: Reflect + Typed]);
impl_reflect_list!(VecDeque<T>, [T: Reflect + Typed]);
impl_reflect_list!(BTreeSet<T>, [T: Reflect + Typed]);
impl_reflect_list!(
    HashSet<T, S>,
    [T: Reflect + Typed, S: BuildHasher + Send + Sync + 'static]
);
impl_reflect_list!(
    hashbrown::HashSet<T, S>,
    [T: Reflect + Typed, S: BuildHasher + Send + Sync + 'static]
);

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> ReflectIter<'_> {
        Box::new(self.as_slice().iter().map(|item| item as &dyn Reflect))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn list_iterates_in_order() {
        let value: VecDeque<u8> = [3, 1, 2].into_iter().collect();
        let ReflectRef::List(list) = value.reflect_ref() else {
            panic!("not a list");
        };
        let items: Vec<u8> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(items, [3, 1, 2]);
    }

    #[test]
    fn array_keeps_capacity() {
        let info = <[u16; 4] as Typed>::type_info().as_array().unwrap();
        assert_eq!(info.capacity(), 4);
        assert!(info.item_info().type_is::<u16>());

        let value = [1_u16, 2, 3, 4];
        assert_eq!(value.reflect_type_info().kind(), ReflectKind::Array);
        assert!(matches!(value.reflect_ref(), ReflectRef::Array(l) if l.len() == 4));
    }
}
