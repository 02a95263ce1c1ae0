//! Time-based cache with per-entry TTL (Time To Live) support.
//!
//! This module provides a thread-safe cache whose entries each carry their own
//! expiry instant. Expired entries read as misses and are evicted on lookup.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A cache entry with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// A thread-safe cache with time-based expiration and prefix invalidation.
///
/// Keys are strings so that whole groups of entries can be dropped by prefix
/// (for example everything under `/networks`). The cache is cheap to clone;
/// clones share the same store.
///
/// There is no size bound. Entries live until they expire and are looked up,
/// are overwritten, or are cleared.
#[derive(Clone)]
pub struct TimedCache<V>
where
    V: Clone,
{
    cache: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
}

impl<V> Default for TimedCache<V>
where
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TimedCache<V>
where
    V: Clone,
{
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a value that stays fresh for `ttl`.
    ///
    /// Any existing entry under the same key is replaced.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.into(), entry);
        }
    }

    /// Get a value from the cache if it exists and hasn't expired.
    ///
    /// An expired entry is removed and reported as `None`, exactly like a key
    /// that was never stored.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();

        if let Ok(cache) = self.cache.read() {
            match cache.get(key) {
                Some(entry) if entry.is_live(now) => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Re-check under the write lock; another writer may have refreshed it.
        if let Ok(mut cache) = self.cache.write() {
            if let Some(entry) = cache.get(key) {
                if entry.is_live(now) {
                    return Some(entry.value.clone());
                }
                cache.remove(key);
            }
        }

        None
    }

    /// Remove every entry, or only those whose key starts with `prefix`.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self, prefix: Option<&str>) -> usize {
        let Ok(mut cache) = self.cache.write() else {
            return 0;
        };

        let before = cache.len();
        match prefix {
            None => cache.clear(),
            Some(prefix) => cache.retain(|key, _| !key.starts_with(prefix)),
        }
        before - cache.len()
    }

    /// Remove all expired entries from the cache.
    ///
    /// `get()` already ignores expired entries; this frees the ones that are
    /// never read again. Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let Ok(mut cache) = self.cache.write() else {
            return 0;
        };

        let before = cache.len();
        cache.retain(|_, entry| entry.is_live(now));
        before - cache.len()
    }

    /// Get the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(cache) = self.cache.read() {
            cache.len()
        } else {
            0
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> std::fmt::Debug for TimedCache<V>
where
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_set_and_get() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", MINUTE);

        assert_eq!(cache.get("key1"), Some("value1"));
        assert_eq!(cache.get("key2"), None);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", Duration::from_millis(10));

        // Should exist immediately
        assert_eq!(cache.get("key1"), Some("value1"));

        thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn test_expired_entry_is_evicted_on_lookup() {
        let cache = TimedCache::new();
        cache.set("short", 1, Duration::from_millis(5));
        cache.set("long", 2, MINUTE);

        thread::sleep(Duration::from_millis(15));
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_ttl_is_never_served() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", Duration::ZERO);
        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn test_entries_keep_their_own_ttl() {
        let cache = TimedCache::new();
        cache.set("pool", "p", Duration::from_millis(10));
        cache.set("network", "n", MINUTE);

        thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.get("pool"), None);
        assert_eq!(cache.get("network"), Some("n"));
    }

    #[test]
    fn test_clear_all() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", MINUTE);
        cache.set("key2", "value2", MINUTE);

        assert_eq!(cache.clear(None), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_prefix() {
        let cache = TimedCache::new();
        cache.set("/networks/x", "x", MINUTE);
        cache.set("/networks/x/pools?limit=5", "xp", MINUTE);
        cache.set("/pools/y", "y", MINUTE);

        assert_eq!(cache.clear(Some("/networks")), 2);

        assert_eq!(cache.get("/networks/x"), None);
        assert_eq!(cache.get("/networks/x/pools?limit=5"), None);
        assert_eq!(cache.get("/pools/y"), Some("y"));
    }

    #[test]
    fn test_cleanup_expired() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", Duration::from_millis(10));
        cache.set("key2", "value2", Duration::from_millis(10));
        cache.set("key3", "value3", MINUTE);

        thread::sleep(Duration::from_millis(20));

        // Expired entries linger until cleaned up
        assert_eq!(cache.len(), 3);

        assert_eq!(cache.cleanup_expired(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key3"), Some("value3"));
    }

    #[test]
    fn test_update_value() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", MINUTE);
        cache.set("key1", "value2", MINUTE);
        assert_eq!(cache.get("key1"), Some("value2"));
    }

    #[test]
    fn test_clone_cache() {
        let cache1 = TimedCache::new();
        cache1.set("key1", "value1", MINUTE);

        // Clone shares the same underlying cache
        let cache2 = cache1.clone();
        assert_eq!(cache2.get("key1"), Some("value1"));

        cache2.set("key2", "value2", MINUTE);
        assert_eq!(cache1.get("key2"), Some("value2"));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = TimedCache::new();
        let cache_clone = cache.clone();

        let handle = thread::spawn(move || {
            for i in 0..100 {
                cache_clone.set(format!("key{}", i), format!("value{}", i), MINUTE);
            }
        });

        for i in 100..200 {
            cache.set(format!("key{}", i), format!("value{}", i), MINUTE);
        }

        handle.join().unwrap();

        assert_eq!(cache.len(), 200);
        assert_eq!(cache.get("key42"), Some("value42".to_string()));
    }

    #[test]
    fn test_debug_format() {
        let cache = TimedCache::new();
        cache.set("key1", "value1", MINUTE);

        let debug_str = format!("{:?}", cache);
        assert!(debug_str.contains("TimedCache"));
        assert!(debug_str.contains("entries"));
    }
}
