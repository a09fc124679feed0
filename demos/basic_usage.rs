//! Basic LRU cache usage.

use arena_lru::{LruCache, LruCacheConfig};

fn main() {
    let config = match LruCacheConfig::try_from(2i64) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    let mut cache: LruCache<String, String> = LruCache::init(config, None);

    cache.put("a".to_string(), "1".to_string());
    cache.put("b".to_string(), "2".to_string());

    // refresh "a" so that "b" is the oldest entry
    if let Some(value) = cache.get("a") {
        println!("a = {value}");
    }

    if let Some((key, value)) = cache.put("c".to_string(), "3".to_string()) {
        println!("evicted {key} = {value}");
    }

    for key in ["a", "b", "c"] {
        match cache.get(key) {
            Some(value) => println!("{key}: hit ({value})"),
            None => println!("{key}: miss"),
        }
    }

    // a zero-capacity cache accepts writes but never retains them
    let mut empty: LruCache<&str, i32> = LruCache::new(0);
    empty.put("x", 1);
    println!("zero-capacity cache holds {} entries", empty.len());

    if let Err(err) = LruCacheConfig::try_from(-1i64) {
        println!("rejected: {err}");
    }
}
