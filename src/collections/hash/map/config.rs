use super::ConfigError;

/// The load factor used by [`ChainConfig::default`].
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// The initial table size used by [`ChainConfig::default`]. Prime, like every size the table grows
/// to.
pub const DEFAULT_TABLE_SIZE: usize = 101;
/// The initial capacity of each chain used by [`ChainConfig::default`].
pub const DEFAULT_CHAIN_CAP: usize = 10;

/// Sizing parameters for a [`ChainedHashMap`](super::ChainedHashMap).
///
/// # Examples
/// ```
/// # use basic_containers::collections::hash::map::{ChainConfig, ChainedHashMap};
/// let config = ChainConfig::default().load_factor(0.5).table_size(11);
/// let map: ChainedHashMap<u8, u8> = ChainedHashMap::with_config(config).unwrap();
/// assert_eq!(map.table_size(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// The ratio of entries to table size at which the table is grown and rehashed.
    pub load_factor: f64,
    /// The number of chains the table starts with.
    pub table_size: usize,
    /// The capacity each chain is created with.
    pub chain_cap: usize,
}

impl ChainConfig {
    /// Sets the load factor at which the table grows.
    pub const fn load_factor(mut self, load_factor: f64) -> ChainConfig {
        self.load_factor = load_factor;
        self
    }

    /// Sets the initial number of chains in the table.
    pub const fn table_size(mut self, table_size: usize) -> ChainConfig {
        self.table_size = table_size;
        self
    }

    /// Sets the capacity that new chains are created with.
    pub const fn chain_cap(mut self, chain_cap: usize) -> ChainConfig {
        self.chain_cap = chain_cap;
        self
    }

    /// Checks that the config can be used to build a table.
    ///
    /// The load factor has to be finite and at least `1 / table_size`. Below that, a single entry
    /// would already exceed it and the table would have to grow far past the number of entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        if !self.load_factor.is_finite() || self.load_factor < self.min_load_factor() {
            return Err(ConfigError::InvalidLoadFactor {
                load_factor: self.load_factor,
            });
        }
        Ok(())
    }

    /// The smallest load factor accepted for the configured table size.
    pub fn min_load_factor(&self) -> f64 {
        1.0 / self.table_size as f64
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            load_factor: DEFAULT_LOAD_FACTOR,
            table_size: DEFAULT_TABLE_SIZE,
            chain_cap: DEFAULT_CHAIN_CAP,
        }
    }
}
