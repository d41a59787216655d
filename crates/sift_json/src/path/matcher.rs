use core::fmt;
use core::str::FromStr;

use crate::PatternError;
use crate::path::{MatchResult, Path, PathItem};

// -----------------------------------------------------------------------------
// PathPattern

/// A single dotted pattern, one [`PathItem`] per level.
///
/// A path is compared level by level from the root. The first level that is
/// not [`Included`](MatchResult::Included) decides the result. A path deeper
/// than the pattern is not governed by it.
///
/// ```
/// use sift_json::{MatchResult, Path, PathPattern};
///
/// let pattern = PathPattern::parse("children.(id,name)").unwrap();
/// let children = Path::root().push("children");
///
/// assert_eq!(pattern.max_depth(), 2);
/// assert_eq!(pattern.matches(&children), MatchResult::Included);
/// assert_eq!(pattern.matches(&children.push("name")), MatchResult::Included);
/// assert_eq!(pattern.matches(&children.push("age")), MatchResult::NotFound);
/// assert_eq!(pattern.matches(&children.push("id").push("x")), MatchResult::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    items: Box<[PathItem]>,
}

impl PathPattern {
    /// Parses a dotted pattern. Whitespace is ignored.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        let items = pattern
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(PatternError::EmptySegment {
                        pattern: pattern.clone(),
                    })
                } else {
                    PathItem::parse(segment)
                }
            })
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self { items })
    }

    /// Returns the rules, one per level.
    #[inline]
    pub fn items(&self) -> &[PathItem] {
        &self.items
    }

    /// Returns the number of levels the pattern governs.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.items.len()
    }

    /// Matches `path` against the pattern.
    pub fn matches(&self, path: &Path) -> MatchResult {
        if path.depth() > self.items.len() {
            return MatchResult::NotFound;
        }
        for (item, name) in self.items.iter().zip(path.iter()) {
            let result = item.matches(name);
            if result != MatchResult::Included {
                return result;
            }
        }
        MatchResult::Included
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// PathMatcher

/// The ordered patterns of a serializer.
///
/// Patterns are tried in order; the first one that does not answer
/// [`NotFound`](MatchResult::NotFound) decides. An earlier pattern that
/// excludes a field therefore wins over a later, broader one.
///
/// ```
/// use sift_json::{MatchResult, Path, PathMatcher};
///
/// let matcher = PathMatcher::new(["(^password)", "*", "  "]).unwrap();
/// assert_eq!(matcher.max_depth(), 1);
/// assert_eq!(matcher.matches(&Path::root().push("password")), MatchResult::Excluded);
/// assert_eq!(matcher.matches(&Path::root().push("name")), MatchResult::Included);
/// assert_eq!(matcher.to_string(), "Path Matcher: (^password) | *");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMatcher {
    patterns: Box<[PathPattern]>,
    max_depth: usize,
}

impl PathMatcher {
    /// Parses `patterns`, in order. Blank patterns are dropped.
    ///
    /// Fails on the first malformed pattern.
    pub fn new<I>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .filter(|p| !p.as_ref().trim().is_empty())
            .map(|p| PathPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_patterns(patterns))
    }

    /// Creates a matcher from already parsed patterns.
    pub fn from_patterns(patterns: impl Into<Box<[PathPattern]>>) -> Self {
        let patterns = patterns.into();
        let max_depth = patterns
            .iter()
            .map(PathPattern::max_depth)
            .max()
            .unwrap_or(0);
        Self {
            patterns,
            max_depth,
        }
    }

    /// Returns the patterns, in order.
    #[inline]
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    /// Returns the deepest level any pattern governs, `0` without patterns.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns whether some pattern lists `name` at `level`, counted from 0.
    ///
    /// Two names that no pattern lists at `level` get the same verdict on
    /// every path through that level.
    pub fn lists_at(&self, level: usize, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.items().get(level).is_some_and(|item| item.lists(name)))
    }

    /// Matches `path` against the patterns.
    pub fn matches(&self, path: &Path) -> MatchResult {
        self.patterns
            .iter()
            .map(|pattern| pattern.matches(path))
            .find(|result| *result != MatchResult::NotFound)
            .unwrap_or(MatchResult::NotFound)
    }
}

impl fmt::Display for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Path Matcher: ")?;
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(pattern, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PathMatcher, PathPattern};
    use crate::path::{MatchResult, Path};
    use crate::PatternError;

    fn path(names: &[&str]) -> Path {
        names.iter().fold(Path::root(), |path, name| path.push(name))
    }

    #[test]
    fn whitespace_is_ignored() {
        let pattern = PathPattern::parse(" children . ( id , name ) ").unwrap();
        assert_eq!(pattern.to_string(), "(children).(id,name)");
    }

    #[test]
    fn empty_segment_reports_pattern() {
        assert_eq!(
            PathPattern::parse("a..b"),
            Err(PatternError::EmptySegment {
                pattern: "a..b".into()
            })
        );
        assert!(PathMatcher::new(["name", "a.()"]).is_err());
    }

    #[test]
    fn root_is_included_by_any_pattern() {
        let pattern = PathPattern::parse("(^a)").unwrap();
        assert_eq!(pattern.matches(&Path::root()), MatchResult::Included);
        assert_eq!(
            PathMatcher::default().matches(&Path::root()),
            MatchResult::NotFound
        );
    }

    #[test]
    fn short_circuit_on_first_rejection() {
        let pattern = PathPattern::parse("(^a).*").unwrap();
        assert_eq!(pattern.matches(&path(&["a", "x"])), MatchResult::Excluded);
        assert_eq!(pattern.matches(&path(&["b", "x"])), MatchResult::Included);

        let pattern = PathPattern::parse("a.b").unwrap();
        assert_eq!(pattern.matches(&path(&["c", "b"])), MatchResult::NotFound);
    }

    #[test]
    fn first_decisive_pattern_wins() {
        let matcher = PathMatcher::new(["a.(^b)", "a.*"]).unwrap();
        assert_eq!(matcher.matches(&path(&["a", "b"])), MatchResult::Excluded);
        assert_eq!(matcher.matches(&path(&["a", "c"])), MatchResult::Included);

        let reversed = PathMatcher::new(["a.*", "a.(^b)"]).unwrap();
        assert_eq!(reversed.matches(&path(&["a", "b"])), MatchResult::Included);
    }

    #[test]
    fn names_listed_per_level() {
        let matcher = PathMatcher::new(["*.(^secret)", "(a,b).id"]).unwrap();
        assert!(matcher.lists_at(0, "a"));
        assert!(!matcher.lists_at(0, "c"));
        assert!(matcher.lists_at(1, "secret"));
        assert!(matcher.lists_at(1, "id"));
        assert!(!matcher.lists_at(1, "a"));
        assert!(!matcher.lists_at(2, "id"));
    }

    #[test]
    fn matching_is_pure() {
        let matcher = PathMatcher::new(["children.name", "(^secret)"]).unwrap();
        let p = path(&["children", "name"]);
        let first = matcher.matches(&p);
        for _ in 0..3 {
            assert_eq!(matcher.matches(&p), first);
        }
        assert_eq!(matcher.max_depth(), 2);
    }
}
