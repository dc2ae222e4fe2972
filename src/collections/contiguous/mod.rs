//! Contiguous collection types. Namely [`Array`] as fixed-size storage and [`ArrayMap`], a
//! dictionary that keeps its entries packed at the front of an Array.
#![warn(missing_docs)]

pub mod array;
pub mod array_map;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use array_map::ArrayMap;
