#![cfg(test)]

use std::collections::HashMap as StdHashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use super::*;
use crate::collections::hash::prime::{is_prime, next_prime};
use crate::collections::traits::Dictionary;
use crate::util::hash::{IdentityHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

type IdentityMap<K, V> = ChainedHashMap<K, V, IdentityHasherBuilder>;

fn identity_map<K: std::hash::Hash + Eq, V>(table_size: usize) -> IdentityMap<K, V> {
    ChainedHashMap::with_config_and_hasher(
        ChainConfig::default().table_size(table_size),
        IdentityHasherBuilder,
    ).unwrap()
}

#[test]
fn test_put_and_get() {
    let mut map = ChainedHashMap::new();
    assert_eq!(map.put("a", 1), None);
    assert_eq!(map.put("b", 2), None);
    assert_eq!(map.put("a", 3), Some(1), "Putting an existing key should return the old value.");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"a"), &3);
    assert_eq!(map[&"b"], 2);
    assert_eq!(map.try_get(&"c"), Err(KeyNotFound));
    assert!(map.contains_key(&"a"));
    assert!(!map.contains_key(&"c"));
}

#[test]
fn test_get_missing_panics() {
    assert_panics!({
        let map: ChainedHashMap<u8, u8> = ChainedHashMap::new();
        map.get(&0);
    });
}

#[test]
fn test_resize_trigger_point() {
    let mut map = ChainedHashMap::new();
    assert_eq!(map.table_size(), DEFAULT_TABLE_SIZE);

    for i in 0..75 {
        map.put(i, i);
    }
    assert_eq!(map.table_size(), 101, "75 / 101 is below the load factor, so no resize yet.");

    map.put(0, 100);
    assert_eq!(map.table_size(), 101, "Overwriting an existing key should never resize.");

    map.put(75, 75);
    assert_eq!(
        map.table_size(), 211,
        "The 76th key reaches 76 / 101 >= 0.75 and should grow to the next prime after 202."
    );

    for i in 0..76 {
        let expected = if i == 0 { 100 } else { i };
        assert_eq!(map.get(&i), &expected, "Every key should survive rehashing.");
    }
}

#[rstest]
#[case(2, 0.75)]
#[case(11, 0.5)]
#[case(101, 0.75)]
#[case(3, 2.0)]
fn test_growth_sequence(#[case] table_size: usize, #[case] load_factor: f64) {
    let config = ChainConfig::default().table_size(table_size).load_factor(load_factor);
    let mut map = ChainedHashMap::with_config(config).unwrap();
    let mut previous = map.table_size();

    for i in 0..1_000_u32 {
        map.put(i, i.to_string());

        if map.table_size() != previous {
            assert_eq!(
                map.table_size(), next_prime(previous * 2),
                "The table should grow to the smallest prime greater than double its size."
            );
            assert!(is_prime(map.table_size()));
            previous = map.table_size();
        }

        assert!(
            (map.len() as f64 / map.table_size() as f64) < load_factor,
            "The load factor should be respected after every insertion."
        );
    }

    for i in 0..1_000_u32 {
        assert_eq!(map.get(&i), &i.to_string());
    }
}

#[test]
fn test_load_factor_floor() {
    // The smallest accepted load factor is reached by the very first entry.
    let config = ChainConfig::default().table_size(2).load_factor(0.5);
    assert_eq!(config.min_load_factor(), 0.5);
    let mut map = ChainedHashMap::with_config(config).unwrap();
    map.put('x', ());
    assert_eq!(map.table_size(), 5, "A single growth should be enough at the floor.");

    for load_factor in [0.49, 1e-9, f64::MIN_POSITIVE] {
        let config = ChainConfig::default().table_size(2).load_factor(load_factor);
        assert_eq!(
            ChainedHashMap::<char, ()>::with_config(config).err(),
            Some(ConfigError::InvalidLoadFactor { load_factor }),
            "A load factor below 1 / table size should be rejected, not grown towards."
        );
    }
}


#[test]
fn test_remove() {
    let mut map = identity_map(7);
    map.put(1_usize, "one");
    map.put(8, "eight");

    assert_eq!(map.remove(&15), None, "Removing an absent key from a chain should return None.");
    assert_eq!(map.len(), 2, "Removing an absent key from an existing chain shouldn't change len.");

    assert_eq!(map.remove(&2), None, "Removing from a chain that doesn't exist should return None.");
    assert_eq!(map.len(), 2);

    assert_eq!(map.remove(&1), Some("one"));
    assert_eq!(map.len(), 1);
    assert!(!map.contains_key(&1));
    assert_eq!(map.get(&8), &"eight", "Other keys in the same chain should remain.");
}

#[test]
fn test_hash_collisions() {
    let mut map = ChainedHashMap::with_hasher(IdentityHasherBuilder);
    map.put(ManualHash::new(0, "zero"), 0);
    map.put(ManualHash::new(0, "one"), 1);
    map.put(ManualHash::new(101, "two"), 2);
    map.put(ManualHash::new(5, "three"), 3);

    let chain = map.chains[0].as_ref().unwrap();
    assert_eq!(chain.len(), 3, "Keys with equal indices should share a chain.");

    assert_eq!(map.remove(&ManualHash::new(0, "zero")), Some(0));
    assert_eq!(map.get(&ManualHash::new(101, "two")), &2);
    assert_eq!(map.get(&ManualHash::new(0, "one")), &1);
    assert_eq!(map.try_get(&ManualHash::new(0, "zero")), Err(KeyNotFound));
}

#[test]
fn test_iteration_order() {
    let mut map = identity_map(7);
    for key in [8_usize, 3, 1, 0] {
        map.put(key, key * 10);
    }

    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        [0, 8, 1, 3],
        "Iteration should go chain by chain, skipping empty chains."
    );
    assert_eq!(map.iter().len(), 4);

    let mut owned = map.clone().into_iter().collect::<Vec<_>>();
    owned.sort();
    assert_eq!(owned, [(0, 0), (1, 10), (3, 30), (8, 80)]);
    assert_eq!(map.into_values().sum::<usize>(), 120);

    let empty: IdentityMap<usize, usize> = identity_map(3);
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_empty_chains_skipped() {
    let mut map = identity_map(5);
    map.put(2_usize, 0_u8);
    map.remove(&2);

    assert!(map.chains[2].is_some(), "Chains stay allocated after their last entry is removed.");
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.to_string(), "[]");
}

#[test]
fn test_config_validation() {
    let zero = ChainConfig::default().table_size(0);
    assert_eq!(
        ChainedHashMap::<u8, u8>::with_config(zero).err(),
        Some(ConfigError::ZeroTableSize)
    );

    for load_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = ChainConfig::default().load_factor(load_factor);
        let error = ChainedHashMap::<u8, u8>::with_config(config).err();
        assert!(
            error.is_some_and(|e| e.is_invalid_load_factor()),
            "A load factor of {load_factor} should be rejected."
        );
    }

    let config = ChainConfig::default().chain_cap(0).table_size(2);
    let mut map = ChainedHashMap::with_config(config).unwrap();
    map.put(1, 1);
    map.put(2, 2);
    assert_eq!(map.len(), 2, "Chains created with no capacity should still grow.");
    assert_eq!(map.load_factor(), DEFAULT_LOAD_FACTOR);
}

#[test]
fn test_equality_and_display() {
    let a: ChainedHashMap<_, _> = [(1, "one"), (2, "two")].into_iter().collect();
    let mut b = ChainedHashMap::with_config(ChainConfig::default().table_size(3)).unwrap();
    b.put(2, "two");
    b.put(1, "one");

    assert_eq!(a, b, "Equality should not depend on table size.");
    b.put(3, "three");
    assert_ne!(a, b);

    let mut single = ChainedHashMap::new();
    single.put("key", "value");
    assert_eq!(single.to_string(), "[key=value]");

    let debug = format!("{:?}", identity_map::<usize, u8>(2));
    assert!(debug.contains("chains: [-, -]"), "Empty chains should be shown as dashes: {debug}");
}

#[test]
fn test_dictionary_trait() {
    fn fill<D: Dictionary<u32, u32>>(dict: &mut D) {
        for i in 0..50 {
            dict.put(i, i * i);
        }
        for i in (0..50).step_by(2) {
            dict.remove(&i);
        }
    }

    let mut hash_map: ChainedHashMap<u32, u32> = ChainedHashMap::new();
    let mut array_map = crate::collections::contiguous::ArrayMap::new();
    fill(&mut hash_map);
    fill(&mut array_map);

    assert_eq!(Dictionary::len(&hash_map), 25);
    assert_eq!(Dictionary::len(&array_map), 25);
    assert!(crate::collections::traits::fmt::dictionaries_eq(&hash_map, &array_map));
    assert_eq!(Dictionary::get(&hash_map, &7), &49);
    assert_eq!(hash_map.get_or_default(&8, &0), &0);
}

#[test]
fn test_against_std() {
    let mut rng = StdRng::seed_from_u64(0xC4A1);
    let config = ChainConfig::default().table_size(2).chain_cap(1);
    let mut map = ChainedHashMap::with_config(config).unwrap();
    let mut expected = StdHashMap::new();

    for _ in 0..10_000 {
        let key = rng.gen_range(0..1_024_u32);
        match rng.gen_range(0..3) {
            0 | 1 => {
                let value = rng.r#gen::<u64>();
                assert_eq!(map.put(key, value), expected.insert(key, value));
            },
            _ => assert_eq!(map.remove(&key), expected.remove(&key)),
        }
        assert_eq!(map.len(), expected.len());
    }

    for (key, value) in &expected {
        assert_eq!(map.get(key), value);
    }
    if let Some(value) = map.get_mut(&0) {
        *value = 0;
    }
    assert_eq!(map.iter().count(), expected.len());
}
