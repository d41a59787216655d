use alloc::borrow::Cow;

use sift_reflect::Reflect;
use sift_reflect::ops::{ReflectRef, key_text};

use crate::serializer::iter::{Entry, write_entries};
use crate::serializer::{Resolver, Serializer};
use crate::{MatchResult, Output, SerializeError};

// Cache slot shared by the keys no pattern lists. Patterns drop whitespace,
// so no pattern can list this name.
const UNLISTED_KEY: &str = "<any key>";

/// Writes a map as a JSON object.
///
/// Keys are written in their textual form and become one level of the path:
/// an entry is only written when `path.key` is included. Null values are
/// left out, and so are keys without a textual form.
///
/// Value serializers are cached per key only for keys some pattern lists at
/// that level. Every other key shares one slot, so the cache stays bounded
/// however many distinct keys are written.
#[derive(Debug)]
pub struct MapSerializer {
    resolver: Resolver,
}

impl MapSerializer {
    /// Creates a serializer for maps at `resolver`'s path.
    #[inline]
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    fn entry<'a>(&self, key: &'a dyn Reflect, value: &'a dyn Reflect) -> Option<Entry<'a>> {
        if key.is_null() || value.is_null() {
            return None;
        }
        let Some(text) = key_text(key) else {
            log::warn!(
                "map key of type `{}` at `{}` has no text form, entry skipped",
                key.reflect_type_info().type_name(),
                self.resolver.path(),
            );
            return None;
        };
        if self.resolver.matcher().matches(&self.resolver.path().push(&text)) != MatchResult::Included {
            return None;
        }
        let level = self.resolver.path().depth();
        let slot = if self.resolver.matcher().lists_at(level, &text) {
            text.as_str()
        } else {
            UNLISTED_KEY
        };
        let serializer = self.resolver.get(value.reflect_type_info(), Some(slot));
        if serializer.is_empty_for(value) {
            return None;
        }
        Some(Entry {
            key: Some(Cow::Owned(text)),
            value,
            serializer,
        })
    }
}

impl Serializer for MapSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let ReflectRef::Map(map) = value.reflect_ref() else {
            return Err(SerializeError::mismatch("a map", value));
        };

        output.begin_object()?;
        write_entries(output, map.iter().filter_map(|(k, v)| self.entry(k, v)))?;
        output.end_object()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use std::collections::BTreeMap;

    use sift_reflect::Reflect;
    use sift_reflect::derive::Reflect;

    use super::MapSerializer;
    use crate::serializer::{Resolver, Serializer};
    use crate::{Path, PathMatcher, SerializeContext, StringOutput};

    #[derive(Reflect)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn serializer(patterns: &[&str]) -> MapSerializer {
        let matcher = Arc::new(PathMatcher::new(patterns).unwrap());
        MapSerializer::new(Resolver::new(SerializeContext::new(), matcher, Path::root()))
    }

    fn write_with(serializer: &MapSerializer, value: &dyn Reflect) -> String {
        let mut out = StringOutput::new();
        serializer.write(&mut out, value).unwrap();
        out.into_string()
    }

    fn write(patterns: &[&str], value: &dyn Reflect) -> String {
        write_with(&serializer(patterns), value)
    }

    #[test]
    fn keys_are_matched_as_path_levels() {
        let map = BTreeMap::from([("a", 1_i32), ("b", 2), ("c", 3)]);
        assert_eq!(write(&["*"], &map), r#"{"a":1,"b":2,"c":3}"#);
        assert_eq!(write(&["(a,c)"], &map), r#"{"a":1,"c":3}"#);
        assert_eq!(write(&["(^a)"], &map), r#"{"b":2,"c":3}"#);
        assert_eq!(write(&["(^a,b,c)"], &map), "{}");
    }

    #[test]
    fn textual_keys_and_null_values() {
        let map = BTreeMap::from([(10_u16, Some(true)), (2, None), (3, Some(false))]);
        assert_eq!(write(&["*"], &map), r#"{"3":false,"10":true}"#);
    }

    #[test]
    fn nested_maps_take_the_key_as_level() {
        let inner = BTreeMap::from([(1_i32, 2_i32)]);
        let map = BTreeMap::from([("a", inner.clone()), ("b", inner)]);
        assert_eq!(write(&["a.1"], &map), r#"{"a":{"1":2}}"#);
        assert_eq!(write(&["a"], &map), "{}");
    }

    #[test]
    fn distinct_keys_share_one_cache_slot() {
        let serializer = serializer(&["*.*"]);
        for round in 0..3 {
            for i in 0..500 {
                let key = format!("k{round}-{i}");
                let map = BTreeMap::from([(key.clone(), Point { x: i, y: round })]);
                let json = write_with(&serializer, &map);
                assert_eq!(json, format!(r#"{{"{key}":{{"x":{i},"y":{round}}}}}"#));
            }
            assert_eq!(serializer.resolver.cached(), 1);
        }
    }

    #[test]
    fn listed_keys_keep_their_own_slot() {
        let serializer = serializer(&["(a).(^y)", "*.*"]);
        let map = BTreeMap::from([
            ("a", Point { x: 1, y: 2 }),
            ("b", Point { x: 3, y: 4 }),
            ("c", Point { x: 5, y: 6 }),
        ]);
        assert_eq!(
            write_with(&serializer, &map),
            r#"{"a":{"x":1},"b":{"x":3,"y":4},"c":{"x":5,"y":6}}"#
        );
        assert_eq!(serializer.resolver.cached(), 2);
    }
}
