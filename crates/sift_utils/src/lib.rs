//! Shared containers for the `sift` crates.
//!
//! - [`hash`]: `hashbrown` containers with fixed, seedless hashers.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
