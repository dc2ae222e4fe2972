use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;

use super::{IntoIter, Iter, Keys, Pair, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::collections::traits::Dictionary;
use crate::collections::traits::fmt::{dictionaries_eq, fmt_dictionary};
#[doc(inline)]
pub use crate::util::error::KeyNotFound;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The capacity used by [`ArrayMap::new`].
pub const DEFAULT_CAP: usize = 100;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values, stored as an unsorted array of [`Pair`]s and searched linearly.
///
/// Entries occupy the first `len` slots of the backing [`Array`], every slot past `len` is an
/// empty placeholder. Removal moves the last entry into the vacated slot, so iteration order is
/// insertion order only until the first removal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(n)` |
/// | `get` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `contains_key` | `O(n)` |
///
/// Despite the linear searches, ArrayMap is competitive for a handful of entries, which is exactly
/// how it is used as a bucket within a hash table.
pub struct ArrayMap<K, V> {
    pub(crate) pairs: Array<Slot<K, V>>,
    pub(crate) len: usize,
}

pub(crate) type Slot<K, V> = Option<Pair<K, V>>;

impl<K, V> ArrayMap<K, V> {
    /// Creates a new ArrayMap with the default capacity of [`DEFAULT_CAP`].
    pub fn new() -> ArrayMap<K, V> {
        ArrayMap::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ArrayMap with the provided `cap`acity, allowing that many insertions without
    /// reallocation.
    pub fn with_cap(cap: usize) -> ArrayMap<K, V> {
        ArrayMap {
            pairs: Array::repeat_default(cap),
            len: 0,
        }
    }

    /// Returns the number of entries in the ArrayMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing storage.
    pub fn cap(&self) -> usize {
        self.pairs.size()
    }

    /// Returns the occupied slots, in storage order.
    pub(crate) fn occupied(&self) -> &[Slot<K, V>] {
        &self.pairs[..self.len]
    }

    /// Returns an iterator over all key-value pairs, in storage order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys, in storage order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, in storage order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over mutable references to all values, in storage order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        let len = self.len;
        ValuesMut {
            inner: self.pairs[..len].iter_mut(),
        }
    }

    /// Doubles the capacity of the backing storage (or allocates the minimum capacity if it is
    /// currently 0).
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_ALLOCATED_CAP,
        );
        tracing::trace!(old_cap = self.cap(), new_cap, len = self.len, "growing array map");
        self.pairs.realloc_with_default(new_cap);
    }
}

impl<K: Eq, V> ArrayMap<K, V> {
    /// Returns the slot index of the entry for `key`, or [`KeyNotFound`] if there is none.
    pub fn find_index(&self, key: &K) -> Result<usize, KeyNotFound> {
        self.position(key).ok_or(KeyNotFound)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if the ArrayMap doesn't contain `key`.
    #[track_caller]
    pub fn get(&self, key: &K) -> &V {
        self.try_get(key).throw()
    }

    /// Returns a reference to the value associated with `key`, or [`KeyNotFound`] if there is
    /// none.
    pub fn try_get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`, if it exists.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.pairs[..self.len]
            .iter_mut()
            .flatten()
            .find(|pair| pair.key == *key)
            .map(Pair::value_mut)
    }

    /// Associates `value` with `key`. If the key was already present its value is replaced and the
    /// previous value returned, otherwise the pair is appended (growing the storage if it is full)
    /// and None is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        if self.len == self.cap() {
            self.grow();
        }

        self.pairs[self.len] = Some(Pair::new(key, value));
        self.len += 1;
        None
    }

    /// Removes the entry for `key` and returns its value, or None if there was no entry.
    ///
    /// The last entry is moved into the removed entry's slot, so this doesn't preserve order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|pair| pair.value)
    }

    /// Removes the entry for `key`, returning the whole pair if it existed.
    pub fn remove_entry(&mut self, key: &K) -> Option<Pair<K, V>> {
        let index = self.position(key)?;

        self.len -= 1;
        // Move the removed pair to the end of the occupied range, then take it out, leaving an
        // empty slot behind.
        self.pairs.swap(index, self.len);
        self.pairs[self.len].take()
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.occupied()
            .iter()
            .position(|slot| matches!(slot, Some(pair) if pair.key == *key))
    }
}

impl<K: Eq, V> Dictionary<K, V> for ArrayMap<K, V> {
    type Iter<'a> = Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn try_get(&self, key: &K) -> Result<&V, KeyNotFound> {
        ArrayMap::try_get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ArrayMap::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        ArrayMap::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ArrayMap::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ArrayMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        ArrayMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ArrayMap::iter(self)
    }
}

impl<K: Eq, V> Index<&K> for ArrayMap<K, V> {
    type Output = V;

    #[track_caller]
    fn index(&self, key: &K) -> &Self::Output {
        self.get(key)
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = ArrayMap::with_cap(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K: Eq, V> Extend<(K, V)> for ArrayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        ArrayMap::new()
    }
}

impl<K: Clone, V: Clone> Clone for ArrayMap<K, V> {
    fn clone(&self) -> Self {
        ArrayMap {
            pairs: self.pairs.clone(),
            len: self.len,
        }
    }
}

impl<K: Eq, V: PartialEq> PartialEq for ArrayMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        dictionaries_eq(self, other)
    }
}

impl<K: Eq, V: Eq> Eq for ArrayMap<K, V> {}

impl<K: Debug, V: Debug> Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayMap")
            .field("pairs", &DebugEntries(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a ArrayMap<K, V>);

impl<K: Debug, V: Debug> Debug for DebugEntries<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Display, V: Display> Display for ArrayMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_dictionary(self.iter(), f)
    }
}

impl<K, V> IntoIterator for ArrayMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.pairs.into_iter(),
        }
    }
}
