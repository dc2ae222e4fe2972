use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::slice::Iter as ChainsIter;

use super::{Chain, ChainedHashMap};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;
use crate::collections::contiguous::array_map::Iter as ChainIter;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for ChainedHashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.chains.into_iter().flatten().flatten(),
        }
    }
}

/// A type for owned iteration over a [`ChainedHashMap`]. Produces `(K, V)` tuples, chain by chain.
pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<Flatten<ArrIntoIter<Chain<K, V>>>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.len -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a ChainedHashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            chains: self.chains.iter(),
            current: None,
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`ChainedHashMap`].
///
/// Chains are visited in index order and empty chains are skipped. Each chain is exhausted before
/// moving on to the next, so entries come out in chain order, then in storage order within each
/// chain.
///
/// See [`ChainedHashMap::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) chains: ChainsIter<'a, Chain<K, V>>,
    pub(crate) current: Option<ChainIter<'a, K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry);
            }

            // The current chain is exhausted (or there isn't one yet), so move to the next chain
            // that exists, ending iteration if there are none left.
            match self.chains.next()? {
                Some(chain) => self.current = Some(chain.iter()),
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`ChainedHashMap`].
///
/// See [`ChainedHashMap::keys`].
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

/// An iterator over the values of a [`ChainedHashMap`].
///
/// See [`ChainedHashMap::values`].
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
