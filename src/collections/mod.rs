//! The container types and the traits they share.
//!
//! # Method
//! Dictionaries and lists are separate capabilities. Code that only needs one of them should be
//! written against [`Dictionary`](traits::Dictionary) or [`List`](traits::List), so that the
//! concrete container can be swapped without touching the caller.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
