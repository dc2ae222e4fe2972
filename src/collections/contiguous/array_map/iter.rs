use std::iter::FusedIterator;
use std::slice::{Iter as SlotIter, IterMut as SlotIterMut};

use super::{ArrayMap, Slot};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.occupied().iter(),
        }
    }
}

/// A type for borrowed iteration over an [`ArrayMap`]. Produces entries in storage order.
///
/// See [`ArrayMap::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) inner: SlotIter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        next.and_then(|slot| slot.as_ref()).map(|pair| pair.as_refs())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Only occupied slots are iterated.
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

/// A type for owned iteration over an [`ArrayMap`]. Produces `(K, V)` tuples in storage order.
///
/// See [`ArrayMap::into_iter`].
pub struct IntoIter<K, V> {
    pub(crate) inner: ArrIntoIter<Slot<K, V>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.inner.next().flatten()?;
        self.len -= 1;
        Some(pair.into_parts())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of an [`ArrayMap`].
///
/// See [`ArrayMap::keys`].
pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of an [`ArrayMap`].
///
/// See [`ArrayMap::values`].
pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over mutable references to the values of an [`ArrayMap`].
///
/// See [`ArrayMap::values_mut`].
pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: SlotIterMut<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        next.and_then(|slot| slot.as_mut()).map(|pair| &mut pair.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
