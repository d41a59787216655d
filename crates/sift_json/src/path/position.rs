use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// The position of a value: the field names and map keys walked from the root.
///
/// A `Path` is immutable; [`push`](Path::push) returns a new, deeper path.
///
/// ```
/// use sift_json::Path;
///
/// let root = Path::root();
/// let path = root.push("children").push("name");
///
/// assert_eq!(root.depth(), 0);
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.get(1), Some("name"));
/// assert_eq!(path.to_string(), "children.name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    items: Arc<[Box<str>]>,
}

impl Path {
    /// Returns the empty path of the root value.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path one level below `self`.
    pub fn push(&self, name: &str) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(name.into());
        Self {
            items: items.into(),
        }
    }

    /// Returns the name at `level`, counted from the root.
    #[inline]
    pub fn get(&self, level: usize) -> Option<&str> {
        self.items.get(level).map(AsRef::as_ref)
    }

    /// Returns the number of levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the names, from the root.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.iter().map(AsRef::as_ref)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn push_leaves_parent_untouched() {
        let parent = Path::root().push("a");
        let child = parent.push("b");
        assert_eq!(parent.depth(), 1);
        assert_eq!(child.iter().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(parent.get(1), None);
        assert_eq!(Path::root().to_string(), "");
    }
}
