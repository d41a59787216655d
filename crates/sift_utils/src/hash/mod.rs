//! `hashbrown` containers with fixed hashers.

mod hasher;

pub use hasher::{FixedHashState, FixedHasher, NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] hashing with [`FixedHashState`] unless told otherwise.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] hashing with [`FixedHashState`] unless told otherwise.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

pub use hashbrown::Equivalent;

pub use foldhash;
pub use hashbrown;
