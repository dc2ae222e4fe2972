//! This crate provides a small family of basic containers behind two capability traits: a
//! [`Dictionary`](collections::traits::Dictionary) for key-value lookup and a
//! [`List`](collections::traits::List) for ordered, indexable sequences.
//!
//! # Purpose
//! The containers here are the building blocks of larger structures rather than replacements for
//! [`std::collections`]. [`ArrayMap`](collections::contiguous::ArrayMap) is a linear dictionary
//! that only needs [`Eq`] from its keys. [`ChainedHashMap`](collections::hash::ChainedHashMap)
//! uses ArrayMaps as its chains and grows to prime table sizes. [`LinkedList`](collections::linked::LinkedList)
//! is a doubly linked sequence.
//!
//! # Method
//! Every container is written against its own storage: [`Array`](collections::contiguous::Array)
//! for the contiguous types and heap-allocated nodes for the list. Formatting and equality are
//! derived from iteration alone (see [`collections::traits::fmt`]), so two dictionaries with the
//! same contents compare equal and print the same entries regardless of how they are laid out.
//!
//! # Error Handling
//! Fallible operations come in pairs where it makes sense. `try_get` and friends return a
//! [`Result`] with a small, strongly typed error such as
//! [`IndexOutOfBounds`](collections::traits::list::IndexOutOfBounds) or
//! [`KeyNotFound`](collections::traits::dictionary::KeyNotFound), while `get` and the [`Index`](std::ops::Index)
//! operator panic with that same error. Capacity overflow is always a panic, because nobody wants
//! to handle it on every insertion. Invalid configuration is reported through
//! [`ConfigError`](collections::hash::map::ConfigError) when a map is constructed.
//!
//! # Dependencies
//! `derive_more` is used for error and predicate derives, and `tracing` reports structural events
//! such as resizes at the `TRACE` level. Nothing is logged unless the consumer installs a
//! subscriber.
//!
//! # Features
//! Each collection family can be enabled separately: `contiguous`, `hash` (which requires
//! `contiguous`) and `linked`. All of them are enabled by default through `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
