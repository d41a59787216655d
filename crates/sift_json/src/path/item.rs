use core::fmt;
use core::str::FromStr;

use crate::PatternError;

// -----------------------------------------------------------------------------
// MatchResult

/// The verdict of a pattern on a [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// The position is selected.
    Included,
    /// The pattern does not govern the position.
    NotFound,
    /// The position is explicitly rejected.
    Excluded,
}

// -----------------------------------------------------------------------------
// PathItem

/// The rule applied to one level of a [`Path`](crate::Path).
///
/// ```
/// use sift_json::{MatchResult, PathItem};
///
/// let item: PathItem = "(^password,token)".parse().unwrap();
/// assert_eq!(item.matches("name"), MatchResult::Included);
/// assert_eq!(item.matches("token"), MatchResult::Excluded);
///
/// let item = PathItem::parse("(id,name)").unwrap();
/// assert_eq!(item.matches("name"), MatchResult::Included);
/// assert_eq!(item.matches("age"), MatchResult::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathItem {
    /// `*` or `(*)`: every name is included.
    All,
    /// `name` or `(a,b)`: listed names are included, others are not governed.
    Include(Box<[Box<str>]>),
    /// `(^a,b)`: listed names are excluded, every other name is included.
    Exclude(Box<[Box<str>]>),
}

impl PathItem {
    /// Parses a single segment. Whitespace is not stripped here.
    pub fn parse(segment: &str) -> Result<Self, PatternError> {
        match segment {
            "*" | "(*)" => return Ok(Self::All),
            "" => {
                return Err(PatternError::EmptySegment {
                    pattern: String::new(),
                });
            }
            "()" | "(^)" => {
                return Err(PatternError::EmptyGroup {
                    segment: segment.into(),
                });
            }
            _ => {}
        }

        let Some(group) = segment.strip_prefix('(') else {
            if segment.contains(',') {
                return Err(PatternError::UnbracketedList {
                    segment: segment.into(),
                });
            }
            return Ok(Self::Include(Box::new([Box::<str>::from(segment)])));
        };

        let Some(group) = group.strip_suffix(')') else {
            return Err(PatternError::UnclosedGroup {
                segment: segment.into(),
            });
        };

        match group.strip_prefix('^') {
            Some(names) => Ok(Self::Exclude(Self::names(segment, names)?)),
            None => Ok(Self::Include(Self::names(segment, group)?)),
        }
    }

    // Splits a group body, keeping the first occurrence of each name.
    fn names(segment: &str, body: &str) -> Result<Box<[Box<str>]>, PatternError> {
        let mut names: Vec<Box<str>> = Vec::new();
        for name in body.split(',') {
            if name.is_empty() {
                return Err(PatternError::EmptyName {
                    segment: segment.into(),
                });
            }
            if !names.iter().any(|n| &**n == name) {
                names.push(name.into());
            }
        }
        Ok(names.into_boxed_slice())
    }

    /// Returns whether `name` appears in the item's group.
    ///
    /// `*` lists no name, it treats every name alike.
    pub fn lists(&self, name: &str) -> bool {
        match self {
            Self::All => false,
            Self::Include(names) | Self::Exclude(names) => names.iter().any(|n| &**n == name),
        }
    }

    /// Matches a single name.
    pub fn matches(&self, name: &str) -> MatchResult {
        match self {
            Self::All => MatchResult::Included,
            Self::Include(names) => {
                if names.iter().any(|n| &**n == name) {
                    MatchResult::Included
                } else {
                    MatchResult::NotFound
                }
            }
            Self::Exclude(names) => {
                if names.iter().any(|n| &**n == name) {
                    MatchResult::Excluded
                } else {
                    MatchResult::Included
                }
            }
        }
    }
}

impl FromStr for PathItem {
    type Err = PatternError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, names) = match self {
            Self::All => return f.write_str("*"),
            Self::Include(names) => ("(", names),
            Self::Exclude(names) => ("(^", names),
        };
        f.write_str(prefix)?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        f.write_str(")")
    }
}
