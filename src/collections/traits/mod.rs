//! Capability traits shared by the collections in this crate, along with formatting and comparison
//! helpers that are derived purely from their iteration contracts.
//!
//! [`Dictionary`] is implemented by [`ArrayMap`](crate::collections::contiguous::ArrayMap) and
//! [`ChainedHashMap`](crate::collections::hash::ChainedHashMap), while [`List`] is implemented by
//! [`LinkedList`](crate::collections::linked::LinkedList).

pub mod dictionary;
pub mod fmt;
pub mod list;

#[doc(inline)]
pub use dictionary::Dictionary;
#[doc(inline)]
pub use list::List;
