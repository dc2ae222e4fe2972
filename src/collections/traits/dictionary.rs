#[doc(inline)]
pub use crate::util::error::KeyNotFound;
use crate::util::result::ResultExtension;

/// A mapping of unique keys to values, compared using [`Eq`].
///
/// Implementors only need to provide the fallible / optional methods, the panicking convenience
/// methods are derived from them.
pub trait Dictionary<K: Eq, V> {
    /// A borrowed iterator over the key-value pairs of the dictionary.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)> where Self: 'a, K: 'a, V: 'a;

    /// Returns a reference to the value associated with `key`, or [`KeyNotFound`] if there is no
    /// such value.
    fn try_get(&self, key: &K) -> Result<&V, KeyNotFound>;

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Associates `value` with `key`, returning the value previously associated with `key`, if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry for `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns true if there is a value associated with `key`.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns the number of entries in the dictionary.
    fn len(&self) -> usize;

    /// Creates a new iterator over all entries. Each call produces an independent iterator, starting
    /// from the first entry.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the dictionary doesn't contain `key`.
    #[track_caller]
    fn get(&self, key: &K) -> &V {
        self.try_get(key).throw()
    }

    /// Returns the value associated with `key`, or `default` if there is none.
    fn get_or_default<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.try_get(key).unwrap_or(default)
    }

    /// Returns true if the dictionary contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
