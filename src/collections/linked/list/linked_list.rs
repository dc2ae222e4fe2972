use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::collections::traits::fmt::fmt_list;
use crate::collections::traits::List;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A sequence with links in both directions, implementing [`List`].
///
/// [`add`](LinkedList::add) and [`remove`](LinkedList::remove) work on the back of the list, so
/// used on their own they give last-in-first-out behaviour.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `add/remove` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get/set` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `delete` | `O(min(i, n-i))` |
/// | `index_of` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is live and is unlinked below, so nothing refers to it after
                // this.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        new_head.set_prev(None);
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is live and is unlinked below, so nothing refers to it after
                // this.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        new_tail.set_next(None);
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Appends `value` to the back of the list. Equivalent to [`push_back`](LinkedList::push_back).
    pub fn add(&mut self, value: T) {
        self.push_back(value)
    }

    /// Removes the element at the back of the list and returns it, producing an
    /// [`EmptyContainer`] error if there is nothing to remove.
    pub fn remove(&mut self) -> Result<T, EmptyContainer> {
        self.pop_back().ok_or(EmptyContainer)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Replaces the element at `index` with `value`, returning the element that was there before.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Inserts `value` at `index`, so that it is preceded by `index` elements. The current
    /// occupant and everything after it move one position towards the back. Any index in `0..=len`
    /// is valid.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        match index {
            0 => self.push_front(value),
            i if i == len => self.push_back(value),
            i if i > len => return Err(IndexOutOfBounds { index, len }),
            i => {
                let contents = self.checked_contents_for_index_mut(i)?;
                let next = contents.seek(i);
                // SAFETY: The index isn't 0, so the current occupant has a previous node.
                let prev = unsafe { next.prev().unwrap_unchecked() };

                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(prev),
                    next: Some(next),
                });

                prev.set_next(Some(node));
                next.set_prev(Some(node));
            },
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, linking its neighbours to each other.
    pub fn delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        let len = contents.len.get();

        match index {
            0 => self.pop_front().ok_or(IndexOutOfBounds { index, len }),
            i if i == len - 1 => self.pop_back().ok_or(IndexOutOfBounds { index, len }),
            i => {
                let ptr = contents.seek(i);
                // SAFETY: The node is live and is unlinked below.
                let node = unsafe { ptr.take_node() };

                // SAFETY: For this branch, both prev and next must be defined. Head and tail
                // are handled by the pop front / back branches.
                unsafe {
                    node.prev.unwrap_unchecked().set_next(node.next);
                    node.next.unwrap_unchecked().set_prev(node.prev);
                }
                // SAFETY: If the length was 1, we would have matched one of the previous branches.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

                Ok(node.value)
            },
        }
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, searching from the front.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the links in both directions, panicking if any of them disagree.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none());
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end is closer. The index must be in
    /// bounds.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            Self::seek_fwd(index, self.head)
        } else {
            Self::seek_bwd(self.last_index() - index, self.tail)
        }
    }

    fn seek_fwd(count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: seek only asks for fewer steps than there are nodes after the head.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    fn seek_bwd(count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: seek only asks for fewer steps than there are nodes before the tail.
            node = unsafe { node.prev().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn add(&mut self, item: T) {
        LinkedList::add(self, item)
    }

    fn remove(&mut self) -> Result<T, EmptyContainer> {
        LinkedList::remove(self)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        LinkedList::try_get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        LinkedList::set(self, index, item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        LinkedList::insert(self, index, item)
    }

    fn delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        LinkedList::delete(self, index)
    }

    fn index_of(&self, item: &T) -> Option<usize> where T: PartialEq {
        LinkedList::index_of(self, item)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

// SAFETY: The list owns all of its nodes, so sending it sends every T with it.
unsafe impl<T: Send> Send for LinkedList<T> {}

// SAFETY: Shared access to the list only ever produces shared references to its elements.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

struct DebugContents<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_list(self.iter(), f)
    }
}
