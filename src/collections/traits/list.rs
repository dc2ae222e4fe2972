#[doc(inline)]
pub use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// An ordered, indexable sequence of elements.
///
/// Valid indices for access are `0..len`, while `len` itself is also a valid position for
/// [`insert`](List::insert).
pub trait List<T> {
    /// A borrowed iterator over the elements of the list, from front to back.
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Appends `item` to the back of the list.
    fn add(&mut self, item: T);

    /// Removes and returns the element at the back of the list.
    fn remove(&mut self) -> Result<T, EmptyContainer>;

    /// Returns a reference to the element at `index`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Replaces the element at `index` with `item`, returning the previous element.
    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds>;

    /// Inserts `item` at `index`, shifting the current occupant and all following elements one
    /// index higher. Inserting at `len` is the same as [`add`](List::add).
    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds>;

    /// Removes the element at `index`, shifting all following elements one index lower.
    fn delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Returns the index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize> where T: PartialEq;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Creates a new iterator over the list, starting from the front.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns true if any element of the list is equal to `item`.
    fn contains(&self, item: &T) -> bool where T: PartialEq {
        self.index_of(item).is_some()
    }

    /// Returns true if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
