use alloc::sync::Arc;

use sift_reflect::Reflect;
use sift_reflect::info::ReflectKind;

use crate::serializer::{Resolver, Serializer};
use crate::{Output, SerializeError};

/// Writes a type-erased value (`Box<dyn Reflect>`, `Arc<dyn Reflect>`).
///
/// The concrete type is only known from the value, so the serializer is
/// resolved on every write, at the position of the slot. Resolutions are
/// cached like any other.
#[derive(Debug)]
pub struct DynamicSerializer {
    resolver: Resolver,
}

impl DynamicSerializer {
    /// Creates a serializer for erased values at `resolver`'s path.
    #[inline]
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    fn resolve(&self, value: &dyn Reflect) -> Option<Arc<dyn Serializer>> {
        let info = value.reflect_type_info();
        if info.kind() == ReflectKind::Dynamic {
            return None;
        }
        Some(self.resolver.get(info, None))
    }
}

impl Serializer for DynamicSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let serializer = self
            .resolve(value)
            .ok_or_else(|| SerializeError::mismatch("a concrete value", value))?;
        serializer.write(output, value)
    }

    fn is_empty_for(&self, value: &dyn Reflect) -> bool {
        self.resolve(value)
            .is_none_or(|serializer| serializer.is_empty_for(value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use sift_reflect::Reflect;
    use sift_reflect::derive::Reflect;

    use super::DynamicSerializer;
    use crate::serializer::{Resolver, Serializer};
    use crate::{Path, PathMatcher, SerializeContext, StringOutput};

    #[derive(Reflect)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn dynamic(patterns: &[&str], path: Path) -> DynamicSerializer {
        let matcher = Arc::new(PathMatcher::new(patterns).unwrap());
        DynamicSerializer::new(Resolver::new(SerializeContext::new(), matcher, path))
    }

    #[test]
    fn resolves_at_write_time() {
        let ser = dynamic(&["p.(x)"], Path::root().push("p"));

        let boxed: Box<dyn Reflect> = Box::new(Point { x: 1, y: 2 });
        assert!(!ser.is_empty_for(&*boxed));
        let mut out = StringOutput::new();
        ser.write(&mut out, &*boxed).unwrap();
        assert_eq!(out.as_str(), r#"{"x":1}"#);

        let mut out = StringOutput::new();
        ser.write(&mut out, &*boxed).unwrap();
        ser.write(&mut out, &true).unwrap();
        assert_eq!(out.as_str(), r#"{"x":1}true"#);
    }

    #[test]
    fn cut_off_values_are_empty() {
        let ser = dynamic(&["p"], Path::root().push("p"));
        assert!(ser.is_empty_for(&Point { x: 1, y: 2 }));
        assert!(!ser.is_empty_for(&3_u8));
    }
}
