use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ops::{Deref, DerefMut};

/// An array that is sized at runtime and only changes size through explicit reallocation. Similar
/// to a [`Box<[T]>`](Box<T>), which is what it is built on.
///
/// Array is the backing storage for the dictionaries in this crate: it never grows implicitly, so
/// every change in capacity is a visible decision made by the owning collection.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc_with` | `O(n)` |
pub struct Array<T> {
    pub(crate) inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub fn new() -> Array<T> {
        Array {
            inner: Box::new([]),
        }
    }

    /// Creates a new Array of the provided `size`, calling `f` to produce each element.
    pub fn repeat_with<F: FnMut() -> T>(size: usize, f: F) -> Array<T> {
        Array {
            inner: iter::repeat_with(f).take(size).collect(),
        }
    }

    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Reallocates the Array so that it has exactly `new_size` elements. Existing elements keep
    /// their indices, elements past `new_size` are dropped and new slots are filled by calling `f`.
    pub fn realloc_with<F: FnMut() -> T>(&mut self, new_size: usize, f: F) {
        let old = std::mem::take(&mut self.inner);
        self.inner = old.into_vec()
            .into_iter()
            .chain(iter::repeat_with(f))
            .take(new_size)
            .collect();
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array of the provided `size`, with every element set to `T::default()`.
    ///
    /// # Examples
    /// ```
    /// # use basic_containers::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(4);
    /// assert_eq!(&*arr, &[None, None, None, None]);
    /// ```
    pub fn repeat_default(size: usize) -> Array<T> {
        Array::repeat_with(size, T::default)
    }

    /// Reallocates the Array to `new_size`, filling any new slots with `T::default()`.
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.realloc_with(new_size, T::default)
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        Array {
            inner: Box::new(value),
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
