use core::any::Any;

use crate::info::{Type, TypeInfo, Typed};

// Simple infos only carry the described `Type`.
macro_rules! simple_info {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            ty: Type,
        }

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] describing `T`.")]
            #[inline]
            pub fn new<T: Any + ?Sized>() -> Self {
                Self { ty: Type::of::<T>() }
            }

            /// Returns the underlying [`Type`] metadata.
            #[inline]
            pub const fn ty(&self) -> &Type {
                &self.ty
            }
        }
    };
}

simple_info! {
    /// Type information for terminal values with a direct JSON form:
    /// booleans, characters, numbers and strings.
    ScalarInfo
}

/// Type information for values that are only available as text.
///
/// Numeric opaque types, such as arbitrary precision decimals, have text
/// that is already a valid JSON number.
///
/// ```
/// use sift_reflect::info::OpaqueInfo;
///
/// struct Decimal;
///
/// assert!(!OpaqueInfo::new::<Decimal>().is_numeric());
/// assert!(OpaqueInfo::new::<Decimal>().with_numeric(true).is_numeric());
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    numeric: bool,
}

impl OpaqueInfo {
    /// Creates a new, non-numeric [`OpaqueInfo`] describing `T`.
    #[inline]
    pub fn new<T: Any + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            numeric: false,
        }
    }

    /// Marks the type as a number written through its text.
    #[inline]
    pub const fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn is_numeric(&self) -> bool {
        self.numeric
    }
}

simple_info! {
    /// Type information for type-erased slots such as `Box<dyn Reflect>`.
    ///
    /// The concrete type can only be learned from an instance, through
    /// [`Reflect::reflect_type_info`](crate::Reflect::reflect_type_info).
    DynamicInfo
}

// -----------------------------------------------------------------------------
// ListInfo

/// Type information for ordered, growable containers (`Vec<T>`, `VecDeque<T>`, sets).
///
/// ```
/// use sift_reflect::info::Typed;
///
/// let info = <Vec<Option<u8>> as Typed>::type_info().as_list().unwrap();
/// assert!(info.item_info().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    /// Creates a new [`ListInfo`] describing `T`, a container of `Item`.
    #[inline]
    pub fn new<T: Any, Item: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            item_info: Item::type_info,
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the elements.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}

// -----------------------------------------------------------------------------
// ArrayInfo

/// Type information for fixed-size arrays (`[T; N]`).
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    /// Creates a new [`ArrayInfo`] describing `T`, holding `capacity` values of `Item`.
    #[inline]
    pub fn new<T: Any, Item: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<T>(),
            item_info: Item::type_info,
            capacity,
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the elements.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed element count.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

// -----------------------------------------------------------------------------
// MapInfo

/// Type information for key/value containers (`HashMap<K, V>`, `BTreeMap<K, V>`).
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    /// Creates a new [`MapInfo`] describing `T`, a map from `K` to `V`.
    #[inline]
    pub fn new<T: Any, K: Typed, V: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            key_info: K::type_info,
            value_info: V::type_info,
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
