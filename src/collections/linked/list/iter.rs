use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{LinkedList, ListContents, ListState};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`LinkedList`], from front to back.
pub struct IntoIter<T> {
    // Holding the list and popping from either end keeps it consistent if iteration stops early.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable iteration over a [`LinkedList`].
///
/// See [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    // The fields match a list, but the nodes are never modified. len counts the items left to
    // yield, with head and tail closing in on each other.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.state.advance_front()?;
        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.state.advance_back()?;
        Some(node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

// SAFETY: IterMut hands out &mut T from a list it borrows mutably, so it is a &mut LinkedList<T>
// in disguise.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

// SAFETY: Shared access to IterMut gives no access to the elements at all.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A type for borrowed iteration over a [`LinkedList`].
///
/// See [`LinkedList::iter`].
pub struct Iter<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.state.advance_front()?;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.state.advance_back()?;
        Some(node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

// SAFETY: Iter only hands out &T, like the &LinkedList<T> it was created from.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: As above, only shared references to the elements are reachable.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> ListState<T> {
    /// Moves the head of a borrowed view one node towards the tail, returning the node that was
    /// passed over. Never touches the nodes themselves.
    fn advance_front(&mut self) -> Option<super::NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = *head;

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one item is left to yield, so the head has a next
                        // node.
                        *head = unsafe { node.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node)
            },
        }
    }

    /// The same as [`advance_front`](ListState::advance_front), but from the tail.
    fn advance_back(&mut self) -> Option<super::NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = *tail;

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one item is left to yield, so the tail has a previous
                        // node.
                        *tail = unsafe { node.prev().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node)
            },
        }
    }
}
