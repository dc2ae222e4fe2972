use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::{ChainConfig, ConfigError, Iter, Keys, Values};
use crate::collections::contiguous::{Array, ArrayMap};
use crate::collections::hash::prime::next_prime;
use crate::collections::traits::Dictionary;
use crate::collections::traits::fmt::{dictionaries_eq, fmt_dictionary};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
#[doc(inline)]
pub use crate::util::error::KeyNotFound;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions
/// by chaining.
///
/// The table is an [`Array`] of optional chains, each of which is an [`ArrayMap`] holding every
/// entry whose key hashes to that index. Chains are only created once something is inserted into
/// them. The number of chains (the table size) is always prime when using the default
/// configuration, and every time the ratio of entries to chains reaches the load factor, the table
/// grows to the smallest prime greater than double its current size and all entries are rehashed.
///
/// It is a logic error for keys in a ChainedHashMap to be manipulated in a way that changes their
/// hash. Because of this, ChainedHashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ChainedHashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* In the event of a hash collision, these functions will take additional time to search the
/// chain. Chains stay short as long as the load factor is respected and the hasher is reasonable.
///
/// \** If the insertion pushes the map to its load factor, `put` will take `O(n)` to rehash.
/// \* applies as well.
pub struct ChainedHashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) chains: Array<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) load_factor: f64,
    pub(crate) chain_cap: usize,
    pub(crate) hasher: B,
}

pub(crate) type Chain<K, V> = Option<ArrayMap<K, V>>;

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Creates a new ChainedHashMap using [`ChainConfig::default`] and a [`RandomState`] hasher.
    pub fn new() -> ChainedHashMap<K, V> {
        ChainedHashMap::with_hasher(RandomState::new())
    }

    /// Creates a new ChainedHashMap sized according to `config`, with a [`RandomState`] hasher.
    pub fn with_config(config: ChainConfig) -> Result<ChainedHashMap<K, V>, ConfigError> {
        ChainedHashMap::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Creates a new ChainedHashMap using [`ChainConfig::default`] and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap::from_config(ChainConfig::default(), hasher)
    }

    /// Creates a new ChainedHashMap sized according to `config`, with the provided `hasher`.
    pub fn with_config_and_hasher(
        config: ChainConfig,
        hasher: B,
    ) -> Result<ChainedHashMap<K, V, B>, ConfigError> {
        config.validate()?;
        Ok(ChainedHashMap::from_config(config, hasher))
    }

    /// Builds the map without validating `config`.
    fn from_config(config: ChainConfig, hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap {
            chains: Array::repeat_default(config.table_size),
            len: 0,
            load_factor: config.load_factor,
            chain_cap: config.chain_cap,
            hasher,
        }
    }

    /// Returns the number of entries in the ChainedHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ChainedHashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of chains in the table.
    pub fn table_size(&self) -> usize {
        self.chains.size()
    }

    /// Returns the load factor at which the table grows.
    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if the ChainedHashMap doesn't contain `key`.
    #[track_caller]
    pub fn get(&self, key: &K) -> &V {
        self.try_get(key).throw()
    }

    /// Returns a reference to the value associated with `key`, or [`KeyNotFound`] if there is
    /// none. A miss within an existing chain is reported by the chain itself.
    pub fn try_get(&self, key: &K) -> Result<&V, KeyNotFound> {
        match &self.chains[self.index_from_key(key)] {
            Some(chain) => chain.try_get(key),
            None => Err(KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value associated with `key`, if it exists.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_from_key(key);
        self.chains[index].as_mut()?.get_mut(key)
    }

    /// Associates `value` with `key`, returning the previous value if the key was already present.
    ///
    /// If the key is new and the map reaches its load factor as a result, the table is grown and
    /// rehashed before the entry is stored.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if !self.contains_key(&key) {
            self.len += 1;
            while self.should_grow() {
                self.grow();
            }
        }

        self.chain_for_insert(&key).put(key, value)
    }

    /// Removes the entry for `key`, returning its value if it exists.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.index_from_key(key);
        let removed = self.chains[index].as_mut()?.remove(key);

        // Only count the removal if the chain actually held the key.
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        match &self.chains[self.index_from_key(key)] {
            Some(chain) => chain.contains_key(key),
            None => false,
        }
    }

    /// Returns an iterator over all key-value pairs, in chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys, in chain order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, in chain order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> impl Iterator<Item = K> {
        self.into_iter().map(|(k, _)| k)
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.into_iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Determines whether the ratio of entries to chains has reached the load factor, meaning that
    /// the table should grow.
    pub(crate) fn should_grow(&self) -> bool {
        self.len as f64 / self.table_size() as f64 >= self.load_factor
    }

    /// Grows the table to the smallest prime greater than the current size times the growth
    /// factor.
    pub(crate) fn grow(&mut self) {
        let new_size = next_prime(
            self.table_size().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw()
        );
        self.rehash(new_size);
    }

    /// Replaces the table with one of `new_size` chains and moves every entry into the chain for
    /// its new index.
    pub(crate) fn rehash(&mut self, new_size: usize) {
        tracing::trace!(
            old_size = self.table_size(),
            new_size,
            len = self.len,
            "rehashing chained hash map"
        );

        // Replace the Array first so that we can consume the old Array.
        let old_chains = mem::replace(&mut self.chains, Array::repeat_default(new_size));

        for (key, value) in old_chains.into_iter().flatten().flatten() {
            self.chain_for_insert(&key).put(key, value);
        }
    }

    /// Returns the chain that `key` belongs in, creating it if it doesn't exist yet.
    pub(crate) fn chain_for_insert(&mut self, key: &K) -> &mut ArrayMap<K, V> {
        let index = self.index_from_key(key);
        let chain_cap = self.chain_cap;
        self.chains[index].get_or_insert_with(|| ArrayMap::with_cap(chain_cap))
    }

    /// Calculates the index of the chain for the provided `key`. The result depends on the current
    /// table size, so it has to be recalculated after every rehash.
    pub(crate) fn index_from_key(&self, key: &K) -> usize {
        // The table size is never 0, this is checked when the config is validated.
        (self.hasher.hash_one(key) % self.table_size() as u64) as usize
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V> for ChainedHashMap<K, V, B> {
    type Iter<'a> = Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn try_get(&self, key: &K) -> Result<&V, KeyNotFound> {
        ChainedHashMap::try_get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ChainedHashMap::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        ChainedHashMap::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedHashMap::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ChainedHashMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        ChainedHashMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ChainedHashMap::iter(self)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Index<&K> for ChainedHashMap<K, V, B> {
    type Output = V;

    #[track_caller]
    fn index(&self, key: &K) -> &Self::Output {
        self.get(key)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for ChainedHashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for ChainedHashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        ChainedHashMap::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for ChainedHashMap<K, V, B> {
    fn clone(&self) -> Self {
        ChainedHashMap {
            chains: self.chains.clone(),
            len: self.len,
            load_factor: self.load_factor,
            chain_cap: self.chain_cap,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for ChainedHashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        dictionaries_eq(self, other)
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for ChainedHashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let chains = self.chains.iter()
            .map(|chain| DebugRaw(match chain {
                Some(chain) if !chain.is_empty() => format!(
                    "{:?}",
                    DebugChain(chain),
                ),
                _ => "-".into(),
            }))
            .collect::<Array<_>>();

        f.debug_struct("ChainedHashMap")
            .field("chains", &chains)
            .field("len", &self.len)
            .field("table_size", &self.table_size())
            .field("load_factor", &self.load_factor)
            .field("hasher", &self.hasher)
            .finish()
    }
}

struct DebugChain<'a, K, V>(&'a ArrayMap<K, V>);

impl<K: Debug, V: Debug> Debug for DebugChain<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_dictionary(self.iter(), f)
    }
}
