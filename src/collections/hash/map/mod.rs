//! A module containing [`ChainedHashMap`] and associtated types.
//!
//! Other included types are [`ChainConfig`] for sizing a map, [`ConfigError`] for rejected
//! configurations and types for iteration, providing owned and borrowed iteration over entries,
//! keys or values in a map.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! ChainedHashMap in place would cause a logic error.
//!
//! [`ChainedHashMap`] is also re-exported under the parent module.

mod chained_hash_map;
mod config;
mod error;
mod iter;
mod tests;

pub use chained_hash_map::*;
pub use config::*;
pub use error::*;
pub use iter::*;
