//! A module containing [`LinkedList`] and associtated types.
//!
//! The other included types are for iteration, providing owned and borrowed iteration over the
//! elements of a list.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod length;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
