use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use std::io;

use sift_reflect::Reflect;

use crate::serializer::{Resolver, Serializer};
use crate::{FmtOutput, Output, Path, PathMatcher, PatternError, SerializeContext};
use crate::{SerializeError, StringOutput, WriterOutput};

// -----------------------------------------------------------------------------
// JsonSerializer

/// The entry point: writes values as JSON, keeping only what the patterns
/// include.
///
/// A `JsonSerializer` is meant to be built once and reused. Serializers it
/// resolves along the way are cached, and the cache is shared by every call,
/// including calls from other threads.
///
/// Null values (`None`) produce no output at all. So does a root value that
/// the patterns cut off entirely, such as a struct with no patterns.
///
/// ```
/// use sift_json::JsonSerializer;
/// use sift_reflect::Reflect;
/// use std::collections::BTreeMap;
///
/// let mut inner = BTreeMap::new();
/// inner.insert(1, 2);
/// let mut map: BTreeMap<&str, Box<dyn Reflect>> = BTreeMap::new();
/// map.insert("a", Box::new(inner));
/// map.insert("b", Box::new(2));
///
/// let json = JsonSerializer::new(["a.1"]).unwrap();
/// assert_eq!(json.stringify(&map).unwrap(), r#"{"a":{"1":2}}"#);
/// assert_eq!(json.stringify_option(None).unwrap(), "");
/// ```
///
/// # Cycles
///
/// Values are walked depth-first without tracking what was already visited.
/// A value graph that refers back to itself (through `Arc`, for instance) is
/// only safe when the patterns stop the walk before the cycle closes.
#[derive(Debug)]
pub struct JsonSerializer {
    root: Resolver,
}

impl JsonSerializer {
    /// Creates a serializer with the default [`SerializeContext`].
    ///
    /// Blank patterns are ignored; a malformed one fails the whole call.
    pub fn new<I>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_context(SerializeContext::new(), patterns)
    }

    /// Creates a serializer over `context`.
    pub fn with_context<I>(context: SerializeContext, patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let matcher = PathMatcher::new(patterns)?;
        Ok(Self::from_parts(context, matcher))
    }

    /// Creates a serializer with the default context, plus `overrides`.
    pub fn with_overrides<I, O>(patterns: I, overrides: O) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        O: IntoIterator<Item = (TypeId, Arc<dyn Serializer>)>,
    {
        let context = overrides
            .into_iter()
            .fold(SerializeContext::new(), |context, (id, serializer)| {
                context.register_id(id, serializer)
            });
        Self::with_context(context, patterns)
    }

    /// Creates a serializer from parsed patterns.
    pub fn from_parts(context: SerializeContext, matcher: PathMatcher) -> Self {
        log::debug!("json serializer created, {matcher}");
        Self {
            root: Resolver::new(context, Arc::new(matcher), Path::root()),
        }
    }

    /// Returns a [`JsonSerializerBuilder`].
    #[inline]
    pub fn builder() -> JsonSerializerBuilder {
        JsonSerializerBuilder::default()
    }

    /// Returns the patterns.
    #[inline]
    pub fn matcher(&self) -> &PathMatcher {
        self.root.matcher()
    }

    /// Returns the context.
    #[inline]
    pub fn context(&self) -> &SerializeContext {
        self.root.context()
    }

    /// Writes `value` to a new string.
    pub fn stringify(&self, value: &dyn Reflect) -> Result<String, SerializeError> {
        let mut output = StringOutput::new();
        self.write(&mut output, value)?;
        Ok(output.into_string())
    }

    /// Like [`stringify`](Self::stringify), with an empty string for `None`.
    pub fn stringify_option(&self, value: Option<&dyn Reflect>) -> Result<String, SerializeError> {
        match value {
            Some(value) => self.stringify(value),
            None => Ok(String::new()),
        }
    }

    /// Writes `value` to a byte stream.
    pub fn write_to_writer<W: io::Write>(
        &self,
        writer: W,
        value: &dyn Reflect,
    ) -> Result<(), SerializeError> {
        let mut output = WriterOutput::new(writer);
        self.write(&mut output, value)?;
        output.finish()?;
        Ok(())
    }

    /// Writes `value` to a text target, such as a `Formatter`.
    pub fn write_to_fmt<W: fmt::Write + ?Sized>(
        &self,
        writer: &mut W,
        value: &dyn Reflect,
    ) -> Result<(), SerializeError> {
        self.write(&mut FmtOutput::new(writer), value)
    }

    /// Writes `value` to `output`.
    pub fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        if value.is_null() {
            return Ok(());
        }
        let serializer = self.root.get(value.reflect_type_info(), None);
        if serializer.is_empty_for(value) {
            return Ok(());
        }
        serializer.write(output, value)
    }
}

impl Serializer for JsonSerializer {
    #[inline]
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        JsonSerializer::write(self, output, value)
    }

    fn is_empty_for(&self, value: &dyn Reflect) -> bool {
        value.is_null() || self.root.get(value.reflect_type_info(), None).is_empty_for(value)
    }
}

// -----------------------------------------------------------------------------
// JsonSerializerBuilder

/// Collects the configuration of a [`JsonSerializer`].
///
/// ```
/// use sift_json::JsonSerializer;
/// use sift_json::serializer::{NameEnumSerializer, ToQuotedStringSerializer};
/// use sift_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// enum Role { Admin, Guest }
///
/// #[derive(Reflect)]
/// struct User { id: u64, role: Role }
///
/// let json = JsonSerializer::builder()
///     .pattern("id")
///     .pattern("role")
///     .register::<u64>(ToQuotedStringSerializer)
///     .enum_serializer(NameEnumSerializer)
///     .build()
///     .unwrap();
///
/// let user = User { id: 7, role: Role::Guest };
/// assert_eq!(json.stringify(&user).unwrap(), r#"{"id":"7","role":"Guest"}"#);
/// ```
#[derive(Default)]
pub struct JsonSerializerBuilder {
    patterns: Vec<String>,
    context: Option<SerializeContext>,
    overrides: Vec<(TypeId, Arc<dyn Serializer>)>,
    enum_serializer: Option<Arc<dyn Serializer>>,
}

impl JsonSerializerBuilder {
    /// Adds one pattern after the ones already added.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Adds several patterns, in order.
    pub fn patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Replaces the base context, [`SerializeContext::new`] by default.
    pub fn context(mut self, context: SerializeContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Writes `T` with `serializer`.
    pub fn register<T: Reflect>(mut self, serializer: impl Serializer) -> Self {
        self.overrides.push((TypeId::of::<T>(), Arc::new(serializer)));
        self
    }

    /// Writes enums with `serializer`.
    pub fn enum_serializer(mut self, serializer: impl Serializer) -> Self {
        self.enum_serializer = Some(Arc::new(serializer));
        self
    }

    /// Parses the patterns and creates the serializer.
    pub fn build(self) -> Result<JsonSerializer, PatternError> {
        let mut context = self.context.unwrap_or_default();
        for (id, serializer) in self.overrides {
            context = context.register_id(id, serializer);
        }
        if let Some(serializer) = self.enum_serializer {
            context = context.with_enum_serializer(serializer);
        }
        JsonSerializer::with_context(context, self.patterns)
    }
}

impl fmt::Debug for JsonSerializerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSerializerBuilder")
            .field("patterns", &self.patterns)
            .field("context", &self.context)
            .field("overrides", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use core::any::TypeId;
    use std::collections::{BTreeMap, HashMap};

    use sift_reflect::Reflect;
    use sift_reflect::derive::Reflect;

    use super::JsonSerializer;
    use crate::serializer::{EmptySerializer, Serializer, ToQuotedStringSerializer};
    use crate::{PatternError, SerializeContext};

    #[derive(Reflect)]
    struct Menu {
        name: String,
        parent: Option<Box<Menu>>,
        children: Vec<Menu>,
    }

    impl Menu {
        fn new(name: &str, children: Vec<Menu>) -> Self {
            Self {
                name: name.into(),
                parent: None,
                children,
            }
        }
    }

    fn menu() -> Menu {
        Menu::new("m1", vec![Menu::new("m2", vec![]), Menu::new("m3", vec![])])
    }

    fn stringify(patterns: &[&str], value: &dyn Reflect) -> String {
        JsonSerializer::new(patterns).unwrap().stringify(value).unwrap()
    }

    #[test]
    fn selects_fields() {
        assert_eq!(stringify(&["name"], &menu()), r#"{"name":"m1"}"#);
        assert_eq!(stringify(&["(^children)"], &menu()), r#"{"name":"m1"}"#);
        assert_eq!(
            stringify(&["children.name"], &menu()),
            r#"{"children":[{"name":"m2"},{"name":"m3"}]}"#
        );
    }

    #[test]
    fn follows_optional_parents() {
        let mut child = Menu::new("m2", vec![]);
        child.parent = Some(Box::new(Menu::new("m1", vec![])));
        assert_eq!(
            stringify(&["name", "parent.name"], &child),
            r#"{"name":"m2","parent":{"name":"m1"}}"#
        );
        assert_eq!(
            stringify(&["(^parent)", "*.*"], &child),
            r#"{"name":"m2","children":[]}"#
        );
    }

    #[test]
    fn nested_maps() {
        let mut map: BTreeMap<&str, Box<dyn Reflect>> = BTreeMap::new();
        map.insert("a", Box::new(BTreeMap::from([(1_i32, 2_i32)])));
        map.insert("b", Box::new(2_i32));
        assert_eq!(stringify(&["a.1"], &map), r#"{"a":{"1":2}}"#);
    }

    #[test]
    fn cut_off_elements_leave_no_comma() {
        let items: Vec<Box<dyn Reflect>> = vec![
            Box::new(1_i32),
            Box::new(Menu::new("x", vec![])),
            Box::new("a"),
            Box::new(Menu::new("y", vec![])),
        ];
        assert_eq!(stringify(&[], &items), r#"[1,"a"]"#);
    }

    #[test]
    fn nothing_for_null() {
        let json = JsonSerializer::new(["*"]).unwrap();
        assert_eq!(json.stringify(&Option::<Menu>::None).unwrap(), "");
        assert_eq!(json.stringify_option(None).unwrap(), "");
        assert_eq!(stringify(&[], &menu()), "");
    }

    #[derive(Reflect)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect)]
    struct Envelope {
        kind: &'static str,
        payload: Box<dyn Reflect>,
    }

    #[test]
    fn erased_fields_resolve_per_value() {
        let point = Envelope {
            kind: "point",
            payload: Box::new(Point { x: 1, y: 2 }),
        };
        let number = Envelope {
            kind: "number",
            payload: Box::new(5_u8),
        };

        let json = JsonSerializer::new(["kind", "payload.x"]).unwrap();
        assert_eq!(json.stringify(&point).unwrap(), r#"{"kind":"point","payload":{"x":1}}"#);
        assert_eq!(json.stringify(&number).unwrap(), r#"{"kind":"number","payload":5}"#);

        let json = JsonSerializer::new(["kind", "payload"]).unwrap();
        assert_eq!(json.stringify(&point).unwrap(), r#"{"kind":"point"}"#);
    }

    #[derive(Reflect)]
    #[reflect(opaque, number)]
    struct Decimal(i64, u32);

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Build(u32);

    impl core::fmt::Display for Decimal {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "{}.{:03}", self.0, self.1)
        }
    }

    impl core::fmt::Display for Build {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "b{}", self.0)
        }
    }

    #[derive(Reflect)]
    struct Invoice {
        total: Decimal,
        build: Build,
    }

    #[test]
    fn numeric_opaque_fields_are_unquoted() {
        let invoice = Invoice {
            total: Decimal(12, 5),
            build: Build(42),
        };
        let text = JsonSerializer::new(["*"]).unwrap().stringify(&invoice).unwrap();
        assert_eq!(text, r#"{"total":12.005,"build":"b42"}"#);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["total"].is_number());
        assert!(value["build"].is_string());
    }

    #[test]
    fn output_is_valid_json() {
        let mut map: HashMap<String, Vec<Option<f64>>> = HashMap::new();
        map.insert("quote\"back\\slash\nline".into(), vec![Some(1.5), None, Some(f64::NAN)]);
        map.insert("\u{1}".into(), vec![]);
        let text = stringify(&["*"], &map);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["quote\"back\\slash\nline"], serde_json::json!([1.5, null]));
        assert_eq!(parsed["\u{1}"], serde_json::json!([]));
    }

    #[test]
    fn write_targets() {
        let json = JsonSerializer::new(["name"]).unwrap();

        let mut bytes = Vec::new();
        json.write_to_writer(&mut bytes, &menu()).unwrap();
        assert_eq!(bytes, br#"{"name":"m1"}"#);

        let mut text = String::from(">");
        json.write_to_fmt(&mut text, &menu()).unwrap();
        assert_eq!(text, r#">{"name":"m1"}"#);
    }

    #[test]
    fn overrides_and_failures() {
        let overrides: [(TypeId, Arc<dyn Serializer>); 2] = [
            (TypeId::of::<i32>(), Arc::new(ToQuotedStringSerializer)),
            (TypeId::of::<String>(), Arc::new(EmptySerializer)),
        ];
        let json = JsonSerializer::with_overrides(["*"], overrides).unwrap();
        assert_eq!(json.stringify(&vec![1_i32, 2]).unwrap(), r#"["1","2"]"#);
        assert_eq!(json.stringify(&vec![String::from("a")]).unwrap(), "[]");
        assert!(json.context().contains::<bool>());

        let err = JsonSerializer::new(["a.", "b"]).unwrap_err();
        assert!(matches!(err, PatternError::EmptySegment { .. }));

        let context = SerializeContext::empty();
        let json = JsonSerializer::with_context(context, ["*"]).unwrap();
        assert_eq!(json.stringify(&vec![true]).unwrap(), "[true]");
    }

    #[test]
    fn reuse_from_threads() {
        let json = Arc::new(JsonSerializer::new(["children.name"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let json = json.clone();
                std::thread::spawn(move || json.stringify(&menu()).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                r#"{"children":[{"name":"m2"},{"name":"m3"}]}"#
            );
        }
    }
}
