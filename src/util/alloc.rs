//! Test helpers for observing when values are dropped by a collection.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A value that increments a shared counter each time it (or one of its clones) is dropped.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

#[allow(unused)]
impl CountedDrop {
    /// Creates a new counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
