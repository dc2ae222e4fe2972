//! Linked collection types. Currently just [`LinkedList`], a doubly linked list.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
