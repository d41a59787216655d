use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;

use sift_reflect::Reflect;
use sift_reflect::info::StructInfo;
use sift_reflect::ops::ReflectRef;

use crate::serializer::iter::{Entry, write_entries};
use crate::serializer::{Resolver, Serializer};
use crate::{MatchResult, Output, SerializeError};

struct ObjectField {
    index: usize,
    name: &'static str,
    serializer: Arc<dyn Serializer>,
}

/// Writes a struct as a JSON object.
///
/// The fields are selected once, when the serializer is built: a field is
/// kept if its path is included and its serializer is not empty. Writing
/// only skips fields whose value is null, or resolves to nothing at
/// runtime.
pub struct ObjectSerializer {
    fields: Vec<ObjectField>,
    resolver: Resolver,
}

impl ObjectSerializer {
    /// Creates a serializer for values of `info` at `resolver`'s path.
    pub fn new(info: &StructInfo, resolver: Resolver) -> Self {
        let fields = info
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| {
                let path = resolver.path().push(field.name());
                resolver.matcher().matches(&path) == MatchResult::Included
            })
            .filter_map(|(index, field)| {
                let serializer = resolver.get(field.type_info(), Some(field.name()));
                (!serializer.is_empty()).then_some(ObjectField {
                    index,
                    name: field.name(),
                    serializer,
                })
            })
            .collect();

        Self { fields, resolver }
    }

    /// Returns the names of the fields that can be written, in order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

impl Serializer for ObjectSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let ReflectRef::Struct(object) = value.reflect_ref() else {
            return Err(SerializeError::mismatch("a struct", value));
        };

        let entries = self.fields.iter().filter_map(|field| {
            let value = object.field_at(field.index)?;
            if value.is_null() || field.serializer.is_empty_for(value) {
                return None;
            }
            Some(Entry {
                key: Some(Cow::Borrowed(field.name)),
                value,
                serializer: field.serializer.clone(),
            })
        });

        output.begin_object()?;
        write_entries(output, entries)?;
        output.end_object()?;
        Ok(())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl core::fmt::Debug for ObjectSerializer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObjectSerializer")
            .field("path", self.resolver.path())
            .field("fields", &self.fields.iter().map(|f| f.name).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use sift_reflect::Reflect;
    use sift_reflect::derive::Reflect;
    use sift_reflect::info::Typed;

    use super::ObjectSerializer;
    use crate::serializer::{Resolver, Serializer};
    use crate::{Path, PathMatcher, SerializeContext, StringOutput};

    #[derive(Reflect)]
    #[reflect(rename_all = "camelCase")]
    struct Account {
        user_name: String,
        password: String,
        nick: Option<String>,
        #[reflect(skip)]
        #[expect(dead_code, reason = "not reflected")]
        token: u64,
        tags: Vec<String>,
    }

    fn account() -> Account {
        Account {
            user_name: "ann".into(),
            password: "secret".into(),
            nick: None,
            token: 7,
            tags: vec!["a".into()],
        }
    }

    fn object(patterns: &[&str]) -> ObjectSerializer {
        let matcher = Arc::new(PathMatcher::new(patterns).unwrap());
        let resolver = Resolver::new(SerializeContext::new(), matcher, Path::root());
        let info = Account::type_info().as_struct().unwrap();
        ObjectSerializer::new(info, resolver)
    }

    fn write(serializer: &ObjectSerializer, value: &dyn Reflect) -> String {
        let mut out = StringOutput::new();
        serializer.write(&mut out, value).unwrap();
        out.into_string()
    }

    #[test]
    fn fields_are_selected_once() {
        let all = object(&["*"]);
        assert_eq!(
            all.field_names().collect::<Vec<_>>(),
            ["userName", "password", "nick", "tags"]
        );
        let public = object(&["(^password)", "*"]);
        assert_eq!(
            public.field_names().collect::<Vec<_>>(),
            ["userName", "nick", "tags"]
        );
        assert!(object(&["other"]).is_empty());
    }

    #[test]
    fn null_fields_leave_no_comma() {
        let public = object(&["(^password)", "*"]);
        assert_eq!(
            write(&public, &account()),
            r#"{"userName":"ann","tags":["a"]}"#
        );

        let nick = object(&["(nick,password)"]);
        let mut value = account();
        assert_eq!(write(&nick, &value), r#"{"password":"secret"}"#);
        value.nick = Some("a\tb".into());
        assert_eq!(write(&nick, &value), r#"{"password":"secret","nick":"a\tb"}"#);
    }

    #[test]
    fn rejects_other_values() {
        let all = object(&["*"]);
        assert!(all.write(&mut StringOutput::new(), &1_u8).is_err());
    }
}
