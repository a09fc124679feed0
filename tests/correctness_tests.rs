//! Correctness Tests for the LRU Cache
//!
//! Validates eviction order using small, predictable access patterns.
//! Each test checks explicitly which key was evicted after a put.
//!
//! ## Test Strategy
//! - Small cache sizes (0-3 entries) for the end-to-end scenarios
//! - Larger seeded workloads for the stress cases
//! - `check_invariants` after every scenario

use arena_lru::config::LruCacheConfig;
use arena_lru::LruCache;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

// ============================================================================
// END-TO-END SCENARIOS (capacity 2 unless noted)
// ============================================================================

#[test]
fn test_lru_evicts_oldest_insert() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.put("c", 3), Some(("a", 1)));

    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(&2));
    assert_eq!(cache.get(&"c"), Some(&3));
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_get_refreshes_recency() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a");
    assert_eq!(cache.put("c", 3), Some(("b", 2)));

    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"c"), Some(&3));
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_overwrite_keeps_size_and_refreshes() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.put("a", 99), None);

    assert_eq!(cache.get(&"a"), Some(&99));
    assert_eq!(cache.len(), 2);

    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert!(cache.contains(&"a"));
    assert!(!cache.contains(&"b"));
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_capacity_zero_is_noop() {
    let mut cache = make_lru(0);
    assert_eq!(cache.put("a", 1), None);
    assert_eq!(cache.get(&"a"), None);
    assert!(cache.is_empty());
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_two_n_sequential_keys() {
    for n in [1usize, 2, 3, 10, 64] {
        let mut cache = make_lru(n);
        for i in 0..2 * n {
            cache.put(i, i);
        }
        for i in 0..n {
            assert_eq!(cache.get(&i), None, "key {i} should be evicted (cap {n})");
        }
        for i in n..2 * n {
            assert_eq!(cache.get(&i), Some(&i), "key {i} should remain (cap {n})");
        }
        assert_eq!(cache.len(), n);
        cache.check_invariants().unwrap();
    }
}

#[test]
fn test_lru_two_n_eviction_order() {
    let n = 5;
    let mut cache = make_lru(n);
    for i in 0..n {
        cache.put(i, i);
    }
    for i in n..2 * n {
        let (evicted, _) = cache.put(i, i).unwrap();
        assert_eq!(evicted, i - n);
    }
}

// ============================================================================
// SET/GET AND EVICTION SEQUENCES
// ============================================================================

#[test]
fn test_lru_set_and_get_strings() {
    let mut cache = make_lru(10);
    cache.put("a".to_string(), "1".to_string());
    cache.put("b".to_string(), "2".to_string());
    cache.put("c".to_string(), "3".to_string());

    assert_eq!(cache.get("a").map(String::as_str), Some("1"));
    assert_eq!(cache.get("b").map(String::as_str), Some("2"));
    assert_eq!(cache.get("c").map(String::as_str), Some("3"));
    assert_eq!(cache.get("d"), None);

    cache.put("c".to_string(), "4".to_string());
    assert_eq!(cache.get("c").map(String::as_str), Some("4"));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_lru_eviction_after_overwrites() {
    let mut cache = make_lru(2);

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    assert_eq!(cache.get(&"a"), None);
    assert!(cache.get(&"b").is_some());
    assert!(cache.get(&"c").is_some());

    cache.put("b", 4);
    cache.put("c", 5);
    cache.put("b", 6);

    // c was touched before the last b overwrite
    assert_eq!(cache.put("e", 7), Some(("c", 5)));
    assert_eq!(cache.get(&"c"), None);
    assert_eq!(cache.get(&"b"), Some(&6));
    assert_eq!(cache.get(&"e"), Some(&7));

    cache.get(&"b");
    assert_eq!(cache.put("f", 8), Some(("e", 7)));
    assert_eq!(cache.get(&"e"), None);
    assert!(cache.get(&"b").is_some());
    assert!(cache.get(&"f").is_some());
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_miss_does_not_change_order() {
    let mut cache = make_lru(2);
    cache.put(1, 'a');
    cache.put(2, 'b');
    assert_eq!(cache.get(&3), None);
    assert_eq!(cache.peek_lru(), Some((&1, &'a')));
}

#[test]
fn test_lru_repeated_get_is_stable() {
    let mut cache = make_lru(3);
    cache.put("k", 42);
    cache.put("x", 0);
    let first = cache.get(&"k").copied();
    let second = cache.get(&"k").copied();
    assert_eq!(first, Some(42));
    assert_eq!(first, second);
}

#[test]
fn test_lru_remove_then_reinsert() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    assert_eq!(cache.remove(&"a"), Some(1));
    cache.put("a", 10);
    // "a" is now the newest entry, "b" the oldest
    assert_eq!(cache.put("d", 4), Some(("b", 2)));
    let order: Vec<&str> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(order, vec!["c", "a", "d"]);
    cache.check_invariants().unwrap();
}

// ============================================================================
// STRESS
// ============================================================================

#[test]
fn test_lru_stress_sliding_window() {
    const SIZE: usize = 1000;
    const END: usize = 20 * SIZE;

    let mut cache = make_lru(SIZE);
    for i in 0..SIZE {
        let key = i.to_string();
        cache.put(key.clone(), key.clone());
        assert_eq!(cache.get(&key), Some(&key), "can't set {key}");
    }

    for i in SIZE..END {
        cache.put(i.to_string(), "foo".to_string());
        let old_key = (i - SIZE).to_string();
        assert!(cache.get(&old_key).is_none(), "{old_key} was not deleted");
    }
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_stress_random_ops() {
    let mut cache = make_lru(100);
    let mut rng = StdRng::seed_from_u64(431_234);

    for _ in 0..100_000 {
        let key = (rng.gen::<u32>() % 500).to_string();
        if rng.gen::<bool>() {
            cache.put(key, "foo");
        } else {
            let _ = cache.get(&key);
        }
        assert!(cache.len() <= 100);
    }
    cache.check_invariants().unwrap();
}

#[test]
fn test_lru_stress_shuffled_access_order() {
    const SIZE: usize = 10_000;

    let mut rng = StdRng::seed_from_u64(31_134);
    let mut v: Vec<usize> = (0..SIZE).collect();
    v.shuffle(&mut rng);

    let mut cache = make_lru(SIZE);
    for &i in &v {
        cache.put(i.to_string(), "foo");
    }

    v.shuffle(&mut rng);
    for &i in &v {
        let key = i.to_string();
        assert!(cache.get(&key).is_some(), "{key} not found");
    }

    // the access order above is now the eviction order
    for (i, &old) in v.iter().enumerate() {
        cache.put((i + SIZE).to_string(), "foo");
        let old_key = old.to_string();
        assert!(cache.get(&old_key).is_none(), "{old_key} was not deleted");
    }

    for i in SIZE..2 * SIZE {
        let key = i.to_string();
        assert!(cache.get(&key).is_some(), "{key} not found");
    }
    cache.check_invariants().unwrap();
}
