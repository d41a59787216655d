use alloc::borrow::Cow;
use alloc::sync::Arc;

use sift_reflect::Reflect;

use crate::serializer::Serializer;
use crate::{Output, SerializeError};

/// One admissible element of an array, map or object.
pub(crate) struct Entry<'a> {
    /// The key written before the value; `None` inside arrays.
    pub key: Option<Cow<'a, str>>,
    pub value: &'a dyn Reflect,
    pub serializer: Arc<dyn Serializer>,
}

/// Writes `entries` separated by commas.
///
/// `entries` must already be filtered: every entry it yields is written.
/// The separator after an entry is only written once the next one is known
/// to exist, so skipped elements never leave a dangling comma.
pub(crate) fn write_entries<'a>(
    output: &mut dyn Output,
    entries: impl Iterator<Item = Entry<'a>>,
) -> Result<(), SerializeError> {
    let mut entries = entries.peekable();
    while let Some(entry) = entries.next() {
        if let Some(key) = &entry.key {
            output.key(key)?;
        }
        entry.serializer.write(output, entry.value)?;
        if entries.peek().is_some() {
            output.item_separator()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use super::{Entry, write_entries};
    use crate::StringOutput;
    use crate::serializer::{EmptySerializer, IntegerSerializer, Serializer};

    #[test]
    fn commas_only_between_written_entries() {
        let values = [1_i32, 2, 3, 4, 5];
        let integer: alloc::sync::Arc<dyn Serializer> = alloc::sync::Arc::new(IntegerSerializer);
        let empty = EmptySerializer::shared();

        let entries = values.iter().map(|v| Entry {
            key: None,
            value: v,
            serializer: if v % 2 == 0 { empty.clone() } else { integer.clone() },
        });
        let admissible = entries.filter(|e| !e.serializer.is_empty());

        let mut out = StringOutput::new();
        write_entries(&mut out, admissible).unwrap();
        assert_eq!(out.as_str(), "1,3,5");
    }

    #[test]
    fn keys_and_nothing() {
        let mut out = StringOutput::new();
        write_entries(&mut out, core::iter::empty()).unwrap();
        assert_eq!(out.as_str(), "");

        let value = 7_u64;
        let entry = Entry {
            key: Some(Cow::Borrowed("a\"b")),
            value: &value,
            serializer: alloc::sync::Arc::new(IntegerSerializer),
        };
        write_entries(&mut out, core::iter::once(entry)).unwrap();
        assert_eq!(out.as_str(), r#""a\"b":7"#);
    }
}
