use sift_reflect::Reflect;
use sift_reflect::ops::{ReflectIter, ReflectRef};

use crate::serializer::iter::{Entry, write_entries};
use crate::serializer::{Resolver, Serializer};
use crate::{Output, SerializeError};

// Elements share the position of the container, and each one is resolved
// from its own runtime type. Null and empty elements are left out.
fn write_items(
    resolver: &Resolver,
    output: &mut dyn Output,
    items: ReflectIter<'_>,
) -> Result<(), SerializeError> {
    let entries = items.filter(|item| !item.is_null()).filter_map(|item| {
        let serializer = resolver.get(item.reflect_type_info(), None);
        if serializer.is_empty_for(item) {
            return None;
        }
        Some(Entry {
            key: None,
            value: item,
            serializer,
        })
    });

    output.begin_array()?;
    write_entries(output, entries)?;
    output.end_array()?;
    Ok(())
}

fn items(value: &dyn Reflect) -> Option<ReflectIter<'_>> {
    match value.reflect_ref() {
        ReflectRef::List(list) | ReflectRef::Array(list) => Some(list.iter()),
        _ => None,
    }
}

/// Writes a growable sequence (`Vec`, `VecDeque`, sets) as a JSON array.
#[derive(Debug)]
pub struct ListSerializer {
    resolver: Resolver,
}

impl ListSerializer {
    /// Creates a serializer for lists at `resolver`'s path.
    #[inline]
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Serializer for ListSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let items = items(value).ok_or_else(|| SerializeError::mismatch("a list", value))?;
        write_items(&self.resolver, output, items)
    }
}

/// Writes a fixed-size array as a JSON array.
#[derive(Debug)]
pub struct ArraySerializer {
    resolver: Resolver,
}

impl ArraySerializer {
    /// Creates a serializer for arrays at `resolver`'s path.
    #[inline]
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Serializer for ArraySerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let items = items(value).ok_or_else(|| SerializeError::mismatch("an array", value))?;
        write_items(&self.resolver, output, items)
    }
}
