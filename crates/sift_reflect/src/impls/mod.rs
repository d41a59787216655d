//! Provide some utilities for implementing reflection traits, and the
//! implementations for foreign types.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - [`impl_reflect_opaque!`](crate::impl_reflect_opaque): Reflect a `Display` type as an opaque value.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - string: `String`, `&'static str`, `Cow<'static, str>`, `Box<str>`, `Arc<str>`
//! - list: `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>`, `HashSet<T>` (std and hashbrown), `[T; N]`
//! - map: `HashMap<K, V>` (std and hashbrown), `BTreeMap<K, V>`
//! - wrapper: `Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Reflect>`, `Arc<dyn Reflect>`
//! - opaque: `SystemTime`, `Duration`, `PathBuf`, `IpAddr`, `Ipv4Addr`, `Ipv6Addr`, `SocketAddr`
//! - chrono: ("chrono" feature)
//!     - `DateTime<Utc>`, `DateTime<Local>`, `DateTime<FixedOffset>`
//!     - `NaiveDateTime`, `NaiveDate`, `NaiveTime`
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod macros;

mod list;
mod map;
mod pointer;
mod scalar;
mod std_types;
mod string;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
