use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const SEED: FixedState = FixedState::with_seed(0x5B1F_7A3C_94E0_26D1);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A `foldhash` state with a constant seed.
///
/// Hashes depend on the input only, so they are equal across runs and
/// processes.
///
/// ```
/// use core::hash::BuildHasher;
/// use sift_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("name"), FixedHashState.hash_one("name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHashState

/// A hasher that keeps the last `u64` written as the hash.
///
/// Only meant for keys that are hashes themselves, like `TypeId`.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher(u64);

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        // Little-endian fold, so `write(&n.to_le_bytes())` equals `write_u64(n)`.
        self.0 = bytes
            .iter()
            .rev()
            .fold(self.0, |hash, byte| (hash << 8) | u64::from(*byte));
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

/// Builds [`NoOpHasher`]s.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher(0)
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::NoOpHashState;

    #[test]
    fn no_op_passes_values_through() {
        let mut hasher = NoOpHashState.build_hasher();
        hasher.write_u64(42);
        assert_eq!(hasher.finish(), 42);

        let mut hasher = NoOpHashState.build_hasher();
        hasher.write(&7_u64.to_le_bytes());
        assert_eq!(hasher.finish(), 7);
    }
}
