use derive_more::{Display, Error, IsVariant};

/// The reason a [`ChainConfig`](super::ChainConfig) was rejected.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[display("Load factor must be finite and at least 1 / table size, got {load_factor}!")]
    InvalidLoadFactor {
        load_factor: f64,
    },
    #[display("Unable to calculate indicies for hash-based collection with table size 0!")]
    ZeroTableSize,
}
