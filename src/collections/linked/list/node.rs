use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated with Box, so that take_node can move the value back out of the heap.

/// A pointer to a node owned by a [`LinkedList`](super::LinkedList). The list holds the only
/// NodePtrs to its nodes (apart from borrowed iterators), so while the list is alive and hasn't
/// freed a node, every NodePtr it holds is valid to dereference.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node and moves its contents back onto the stack.
    ///
    /// # Safety
    /// The pointer must still refer to a live node, and neither it nor any copy of it may be used
    /// after this call.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by Box in from_node and the caller guarantees that it
        // hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live, see the type level documentation.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live, see the type level documentation. Mutable access is only
        // handed out through methods that take the list mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is live, see the type level documentation.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live, see the type level documentation.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: The node is live, see the type level documentation.
        unsafe { (*self.0.as_ptr()).prev = link; }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: The node is live, see the type level documentation.
        unsafe { (*self.0.as_ptr()).next = link; }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
