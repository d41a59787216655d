//! Selective JSON serialization.
//!
//! A [`JsonSerializer`] is built from dotted field patterns. Writing a value
//! walks it through [`Reflect`](sift_reflect::Reflect), keeping only the
//! fields, keys and elements whose position the patterns include.
//!
//! ```
//! use sift_json::JsonSerializer;
//! use sift_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Menu {
//!     name: String,
//!     parent: Option<Box<Menu>>,
//!     children: Vec<Menu>,
//! }
//!
//! let leaf = |name: &str| Menu { name: name.into(), parent: None, children: vec![] };
//! let menu = Menu {
//!     name: "m1".into(),
//!     parent: None,
//!     children: vec![leaf("m2"), leaf("m3")],
//! };
//!
//! let json = JsonSerializer::new(["name"]).unwrap();
//! assert_eq!(json.stringify(&menu).unwrap(), r#"{"name":"m1"}"#);
//!
//! let json = JsonSerializer::new(["children.name"]).unwrap();
//! assert_eq!(
//!     json.stringify(&menu).unwrap(),
//!     r#"{"children":[{"name":"m2"},{"name":"m3"}]}"#,
//! );
//! ```
//!
//! ## Patterns
//!
//! A pattern is a list of segments separated by `.`, one per nesting level:
//!
//! | segment | matches |
//! |---|---|
//! | `*`, `(*)` | every name |
//! | `name` | exactly `name` |
//! | `(a,b)` | `a` or `b` |
//! | `(^a,b)` | every name except `a` and `b` |
//!
//! Whitespace is ignored. With several patterns, the first one that either
//! includes or excludes a position decides; see [`PathMatcher`].
//!
//! ## Depth
//!
//! Patterns also bound the depth of the walk: objects and maps are only
//! written above the deepest pattern level, since their fields and keys would
//! sit one level further down. Lists do not consume a level.

// -----------------------------------------------------------------------------
// Extern

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod context;
mod error;
mod json;
mod named;
mod options;
mod output;

pub mod path;
pub mod serializer;

// -----------------------------------------------------------------------------
// Top-level exports

pub use context::SerializeContext;
pub use error::{PatternError, SerializeError};
pub use json::{JsonSerializer, JsonSerializerBuilder};
pub use named::NamedSerializers;
pub use options::{EnumFormat, SerializerOptions};
pub use output::{FmtOutput, Output, StringOutput, WriterOutput};
pub use path::{MatchResult, Path, PathItem, PathMatcher, PathPattern};
pub use serializer::Serializer;
