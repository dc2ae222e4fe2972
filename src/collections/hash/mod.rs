//! Hash-based collection types. Primarily revolves around [`ChainedHashMap`], which resolves
//! collisions by chaining entries into per-bucket [`ArrayMap`](crate::collections::contiguous::ArrayMap)s.

pub mod map;
pub mod prime;

#[doc(inline)]
pub use map::ChainedHashMap;
