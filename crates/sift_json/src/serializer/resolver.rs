use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use sift_reflect::info::TypeInfo;
use sift_utils::hash::{Equivalent, HashMap};

use crate::serializer::{ArraySerializer, DynamicSerializer, EmptySerializer, ListSerializer};
use crate::serializer::{MapSerializer, ObjectSerializer, ScalarSerializer, Serializer};
use crate::serializer::{ToQuotedStringSerializer, ToStringSerializer};
use crate::{Path, PathMatcher, SerializeContext};

// -----------------------------------------------------------------------------
// CacheKey

#[derive(PartialEq, Eq, Hash)]
struct CacheKey {
    type_id: TypeId,
    field: Option<Box<str>>,
}

#[derive(Hash)]
struct CacheKeyRef<'a> {
    type_id: TypeId,
    field: Option<&'a str>,
}

impl Equivalent<CacheKey> for CacheKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &CacheKey) -> bool {
        self.type_id == key.type_id && self.field == key.field.as_deref()
    }
}

impl From<CacheKeyRef<'_>> for CacheKey {
    #[inline]
    fn from(key: CacheKeyRef<'_>) -> Self {
        Self {
            type_id: key.type_id,
            field: key.field.map(Into::into),
        }
    }
}

// -----------------------------------------------------------------------------
// Resolver

/// Picks the serializer for a type at one position, and remembers it.
///
/// Every composite serializer owns a resolver scoped to its own [`Path`].
/// Lookups go to the [`SerializeContext`] first, then to a cache keyed by
/// the type and the optional field name, and only then build a serializer
/// from the structural kind of the type.
///
/// Objects and maps are cut off one level earlier than lists and enums:
/// their fields and keys add a level, list elements do not.
///
/// | kind | built when | serializer |
/// |---|---|---|
/// | list | `depth <= max_depth` | [`ListSerializer`] |
/// | array | `depth <= max_depth` | [`ArraySerializer`] |
/// | map | `depth < max_depth` | [`MapSerializer`] |
/// | struct | `depth < max_depth` | [`ObjectSerializer`] |
/// | enum | `depth <= max_depth` | the context's enum serializer |
/// | scalar | always | [`ScalarSerializer`] |
/// | numeric opaque | always | [`ToStringSerializer`] |
/// | opaque | always | [`ToQuotedStringSerializer`] |
/// | `dyn Reflect` | always | [`DynamicSerializer`] |
///
/// Out of range kinds get the [`EmptySerializer`].
///
/// Concurrent lookups may build the same serializer twice; the first one
/// stored is kept and returned to both.
pub struct Resolver {
    context: SerializeContext,
    matcher: Arc<PathMatcher>,
    path: Path,
    cache: RwLock<HashMap<CacheKey, Arc<dyn Serializer>>>,
}

impl Resolver {
    /// Creates a resolver at `path`.
    pub fn new(context: SerializeContext, matcher: Arc<PathMatcher>, path: Path) -> Self {
        Self {
            context,
            matcher,
            path,
            cache: RwLock::new(HashMap::default()),
        }
    }

    /// Returns the context lookups go to first.
    #[inline]
    pub fn context(&self) -> &SerializeContext {
        &self.context
    }

    /// Returns the patterns.
    #[inline]
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Returns the position this resolver serves.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of serializers kept in the cache.
    pub(crate) fn cached(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns a resolver with the same context and patterns at `path`.
    pub fn child(&self, path: Path) -> Self {
        Self::new(self.context.clone(), self.matcher.clone(), path)
    }

    /// Returns the serializer for a value of type `info`.
    ///
    /// `field` is the field name or map key the value sits under, or `None`
    /// for list elements and for the value at this resolver's own path.
    pub fn get(&self, info: &'static TypeInfo, field: Option<&str>) -> Arc<dyn Serializer> {
        if let Some(serializer) = self.context.get(info.type_id()) {
            return serializer.clone();
        }

        let key = CacheKeyRef {
            type_id: info.type_id(),
            field,
        };
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(serializer) = cache.get(&key) {
            log::trace!("serializer cache hit for `{}` at `{}`", info.type_name(), self.path);
            return serializer.clone();
        }
        drop(cache);

        let serializer = self.build(info, field);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(CacheKey::from(key))
            .or_insert(serializer)
            .clone()
    }

    fn build(&self, info: &'static TypeInfo, field: Option<&str>) -> Arc<dyn Serializer> {
        let path = match field {
            Some(name) => self.path.push(name),
            None => self.path.clone(),
        };
        let depth = path.depth();
        let max_depth = self.matcher.max_depth();

        let serializer: Arc<dyn Serializer> = match info {
            TypeInfo::List(_) | TypeInfo::Array(_) | TypeInfo::Enum(_) if depth > max_depth => {
                EmptySerializer::shared()
            }
            TypeInfo::Map(_) | TypeInfo::Struct(_) if depth >= max_depth => {
                EmptySerializer::shared()
            }
            TypeInfo::List(_) => Arc::new(ListSerializer::new(self.child(path.clone()))),
            TypeInfo::Array(_) => Arc::new(ArraySerializer::new(self.child(path.clone()))),
            TypeInfo::Map(_) => Arc::new(MapSerializer::new(self.child(path.clone()))),
            TypeInfo::Struct(info) => Arc::new(ObjectSerializer::new(info, self.child(path.clone()))),
            TypeInfo::Enum(_) => self.context.enum_serializer().clone(),
            TypeInfo::Scalar(_) => Arc::new(ScalarSerializer),
            TypeInfo::Opaque(info) if info.is_numeric() => Arc::new(ToStringSerializer),
            TypeInfo::Opaque(_) => Arc::new(ToQuotedStringSerializer),
            TypeInfo::Dynamic(_) => Arc::new(DynamicSerializer::new(self.child(path.clone()))),
        };

        log::debug!(
            "built {} serializer for `{}` at `{}`{}",
            info.kind(),
            info.type_name(),
            path,
            if serializer.is_empty() { " (empty)" } else { "" },
        );
        serializer
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("path", &self.path)
            .field("matcher", &self.matcher)
            .field("cached", &self.cached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::fmt;
    use std::collections::BTreeMap;

    use sift_reflect::derive::Reflect;
    use sift_reflect::info::Typed;

    use super::Resolver;
    use crate::serializer::{EmptySerializer, OrdinalEnumSerializer, Serializer};
    use crate::{Output, Path, PathMatcher, SerializeContext, StringOutput};

    #[derive(Reflect)]
    struct Node {
        name: String,
        next: Option<Box<Node>>,
    }

    #[derive(Reflect)]
    enum Color {
        Red,
    }

    #[derive(Reflect)]
    #[reflect(opaque, number)]
    struct Amount(i64);

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Label(u8);

    impl fmt::Display for Amount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
        }
    }

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "L{}", self.0)
        }
    }

    fn resolver(patterns: &[&str], path: Path) -> Resolver {
        let matcher = PathMatcher::new(patterns).unwrap();
        Resolver::new(SerializeContext::new(), Arc::new(matcher), path)
    }

    fn at_depth(depth: usize) -> Path {
        (0..depth).fold(Path::root(), |path, _| path.push("x"))
    }

    #[test]
    fn lookups_are_cached() {
        let r = resolver(&["*.*"], Path::root());
        let a = r.get(Node::type_info(), Some("next"));
        let b = r.get(Node::type_info(), Some("next"));
        let c = r.get(Node::type_info(), Some("other"));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert!(!a.is_empty());
        assert_eq!(r.cached(), 2);
    }

    #[test]
    fn context_wins() {
        let context = SerializeContext::new().register::<Node>(EmptySerializer);
        let matcher = Arc::new(PathMatcher::new(["*"]).unwrap());
        let r = Resolver::new(context, matcher, Path::root());
        assert!(r.get(Node::type_info(), None).is_empty());
        assert!(!r.get(String::type_info(), Some("name")).is_empty());
    }

    #[test]
    fn containers_at_max_depth() {
        let r = resolver(&["x.x"], at_depth(2));
        assert!(!r.get(Vec::<i32>::type_info(), None).is_empty());
        assert!(!r.get(<[i32; 2]>::type_info(), None).is_empty());
        assert!(!r.get(Color::type_info(), None).is_empty());
        assert!(r.get(BTreeMap::<String, i32>::type_info(), None).is_empty());
        assert!(r.get(Node::type_info(), None).is_empty());

        let r = resolver(&["x.x"], at_depth(1));
        assert!(!r.get(BTreeMap::<String, i32>::type_info(), None).is_empty());
        assert!(!r.get(Node::type_info(), None).is_empty());
        assert!(!r.get(Vec::<i32>::type_info(), Some("x")).is_empty());
        assert!(r.get(Node::type_info(), Some("x")).is_empty());

        let r = resolver(&["x.x"], at_depth(3));
        assert!(r.get(Vec::<i32>::type_info(), None).is_empty());
        assert!(r.get(Color::type_info(), None).is_empty());
    }

    #[test]
    fn terminal_kinds_ignore_depth() {
        let r = resolver(&[], at_depth(4));
        assert!(!r.get(String::type_info(), Some("name")).is_empty());
        assert!(!r.get(std::net::Ipv4Addr::type_info(), None).is_empty());
        assert!(!r.get(<Box<dyn sift_reflect::Reflect>>::type_info(), None).is_empty());
    }

    #[test]
    fn numeric_opaque_types_are_unquoted() {
        let r = resolver(&["*"], Path::root());
        let amount = Amount(1999);
        let mut out = StringOutput::new();
        r.get(Amount::type_info(), Some("amount"))
            .write(&mut out, &amount)
            .unwrap();
        out.write_raw(" ").unwrap();
        r.get(Label::type_info(), Some("label"))
            .write(&mut out, &Label(7))
            .unwrap();
        assert_eq!(out.as_str(), r#"19.99 "L7""#);
    }

    #[test]
    fn enums_use_the_context_strategy() {
        let context = SerializeContext::new().with_enum_serializer(OrdinalEnumSerializer);
        let expected = context.enum_serializer().clone();
        let matcher = Arc::new(PathMatcher::new(["*"]).unwrap());
        let r = Resolver::new(context, matcher, Path::root());
        assert!(Arc::ptr_eq(&r.get(Color::type_info(), Some("c")), &expected));
    }
}
