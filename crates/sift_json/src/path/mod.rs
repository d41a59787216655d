//! Field positions and the patterns that select them.
//!
//! - [`Path`]: the position of a value, as the names walked from the root.
//! - [`PathItem`]: a rule for a single level.
//! - [`PathPattern`]: one dotted pattern, one [`PathItem`] per level.
//! - [`PathMatcher`]: the ordered patterns of a serializer.

// -----------------------------------------------------------------------------
// Modules

mod item;
mod matcher;
mod position;

// -----------------------------------------------------------------------------
// Exports

pub use item::{MatchResult, PathItem};
pub use matcher::{PathMatcher, PathPattern};
pub use position::Path;
