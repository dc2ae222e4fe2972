//! A module containing [`ArrayMap`] and associtated types.
//!
//! [`ArrayMap`] is a dictionary backed by an unsorted [`Array`](super::Array) of [`Pair`]s. It
//! requires nothing more than [`Eq`] from its keys, which is what makes it usable as the bucket
//! type for [`ChainedHashMap`](crate::collections::hash::ChainedHashMap).
//!
//! [`ArrayMap`] is also re-exported under the parent module.

mod array_map;
mod iter;
mod pair;

pub use array_map::*;
pub use iter::*;
pub use pair::*;
