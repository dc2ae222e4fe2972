use std::fmt::{self, Display, Formatter};

/// A single key-value entry owned by a dictionary. The key is fixed once the pair is created,
/// while the value can be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a new Pair from a key and its value.
    pub const fn new(key: K, value: V) -> Pair<K, V> {
        Pair { key, value }
    }

    /// Returns a reference to the key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the Pair, returning the key and value as a tuple.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) const fn as_refs(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: Display, V: Display> Display for Pair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
