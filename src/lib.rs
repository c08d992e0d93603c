#![deny(clippy::uninlined_format_args)]
#![deny(clippy::to_string_in_format_args)]

pub mod bytestr;
pub mod cases;
pub mod dataset;
pub mod multiset;

#[cfg(feature = "fast-hash")]
use rustc_hash::FxHasher;
#[cfg(feature = "fast-hash")]
use std::hash::BuildHasherDefault;

#[cfg(not(feature = "fast-hash"))]
use ahash::RandomState;

#[cfg(feature = "fast-hash")]
pub type Build = BuildHasherDefault<FxHasher>;
#[cfg(not(feature = "fast-hash"))]
pub type Build = RandomState;

/// Hash map used by the hash-based equality algorithms.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, Build>;

pub use bytestr::{ByteStr, CStyleStr, HeapStr, InlineStr, FIXED_LEN};
pub use cases::{Algorithm, CaseSpec};
pub use dataset::{generate, generate_pair, Distribution};
pub use multiset::{eq_by_counting, eq_by_multiset, eq_by_sort};
