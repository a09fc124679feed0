//! Cache Metrics Demonstration
//!
//! Runs a small workload against an LRU cache and prints the metrics it
//! collected, showing how hits, misses, overwrites and evictions are counted.

use arena_lru::{config::LruCacheConfig, metrics::CacheMetrics, LruCache};

fn main() {
    println!("Cache Metrics Demonstration");
    println!("===========================\n");

    // Small capacity to force evictions
    let config = LruCacheConfig { capacity: 3 };

    println!("Workload:");
    println!("   - Capacity: {} items", config.capacity);
    println!("   - Insert 3 items, access some, overwrite one, insert 2 more\n");

    let cache = run_workload(config);

    display_metrics(&cache);
    display_contents(&cache);
}

fn run_workload(config: LruCacheConfig) -> LruCache<&'static str, i32> {
    let mut cache = LruCache::init(config, None);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    // apple becomes most recently used; the second get is already at the tail
    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    // misses
    cache.get(&"durian");
    cache.get(&"fig");

    // in-place overwrite, no eviction
    cache.put("cherry", 30);

    // evicts apple, then banana
    for (key, value) in [("date", 4), ("elderberry", 5)] {
        if let Some((old_key, old_value)) = cache.put(key, value) {
            println!("   evicted {old_key} = {old_value} to make room for {key}");
        }
    }

    cache
}

fn display_metrics(cache: &dyn CacheMetrics) {
    println!("\n{} Cache Metrics:", cache.algorithm_name());
    println!("{}", "-".repeat(40));

    // BTreeMap keeps the output order stable between runs
    for (name, value) in cache.metrics() {
        if name.ends_with("rate") || name == "cache_utilization" {
            println!("  {name:<20} {:>8.1}%", value * 100.0);
        } else {
            println!("  {name:<20} {value:>8.0}");
        }
    }
}

fn display_contents(cache: &LruCache<&'static str, i32>) {
    println!("\nContents (least to most recently used):");
    for (key, value) in cache {
        println!("  {key} = {value}");
    }
}
