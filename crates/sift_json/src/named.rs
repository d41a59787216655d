use alloc::boxed::Box;
use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use sift_utils::hash::HashMap;

use crate::{JsonSerializer, PatternError, SerializeContext};

/// Root serializers by name, each built on first use.
///
/// Useful when the same few pattern sets are used all over an application:
/// every name is parsed and resolved once, then shared.
///
/// ```
/// use sift_json::NamedSerializers;
///
/// let named = NamedSerializers::default();
/// let a = named.get_or_build("summary", ["name"]).unwrap();
/// let b = named.get_or_build("summary", ["ignored"]).unwrap();
///
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// assert_eq!(a.stringify(&vec![1, 2]).unwrap(), "[1,2]");
/// ```
#[derive(Debug, Default)]
pub struct NamedSerializers {
    context: SerializeContext,
    serializers: RwLock<HashMap<Box<str>, Arc<JsonSerializer>>>,
}

impl NamedSerializers {
    /// Creates an empty registry whose serializers are built over `context`.
    pub fn new(context: SerializeContext) -> Self {
        Self {
            context,
            serializers: RwLock::new(HashMap::default()),
        }
    }

    /// Returns the serializer called `name`, if it was built.
    pub fn get(&self, name: &str) -> Option<Arc<JsonSerializer>> {
        let serializers = self.serializers.read().unwrap_or_else(PoisonError::into_inner);
        serializers.get(name).cloned()
    }

    /// Returns the serializer called `name`, building it from `patterns` if
    /// this is the first request for it.
    ///
    /// Once a name is built, `patterns` is ignored for it.
    pub fn get_or_build<I>(&self, name: &str, patterns: I) -> Result<Arc<JsonSerializer>, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if let Some(serializer) = self.get(name) {
            return Ok(serializer);
        }

        let mut serializers = self.serializers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(serializer) = serializers.get(name) {
            return Ok(serializer.clone());
        }
        let serializer = Arc::new(JsonSerializer::with_context(self.context.clone(), patterns)?);
        log::debug!("named serializer `{name}` built");
        serializers.insert(name.into(), serializer.clone());
        Ok(serializer)
    }

    /// Returns the number of built serializers.
    pub fn len(&self) -> usize {
        self.serializers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing was built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::NamedSerializers;
    use crate::SerializeContext;
    use crate::serializer::ToQuotedStringSerializer;

    #[test]
    fn builds_once_per_name() {
        let context = SerializeContext::new().register::<i32>(ToQuotedStringSerializer);
        let named = NamedSerializers::new(context);
        assert!(named.is_empty());
        assert!(named.get("ids").is_none());

        let ids = named.get_or_build("ids", ["*"]).unwrap();
        assert_eq!(ids.stringify(&vec![1_i32]).unwrap(), r#"["1"]"#);
        assert!(Arc::ptr_eq(&ids, &named.get("ids").unwrap()));

        assert!(named.get_or_build("bad", ["a..b"]).is_err());
        assert!(named.get("bad").is_none());
        assert_eq!(named.len(), 1);
    }

    #[test]
    fn concurrent_requests_share_one_instance() {
        let named = Arc::new(NamedSerializers::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let named = named.clone();
                std::thread::spawn(move || named.get_or_build("all", ["*"]).unwrap())
            })
            .collect();
        let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(built.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(named.len(), 1);
    }
}
