// Response cache for listing requests
// Keyed by request path; a fresh entry is served instead of issuing the same request again

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CacheStats {
    pub hit_count: AtomicUsize,
    pub miss_count: AtomicUsize,
    pub expired_count: AtomicUsize,
    pub invalidated_count: AtomicUsize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStatsReport {
    pub items_count: usize,
    pub hit_count: usize,
    pub miss_count: usize,
    pub expired_count: usize,
    pub invalidated_count: usize,
}

struct CacheEntry<V> {
    value: V,
    created_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

pub struct ResponseCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
    stats: CacheStats,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            stats: CacheStats::default(),
        }
    }

    pub fn store(&self, key: &str, value: V) {
        debug!("Caching response for {}", key);
        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
            ttl: self.default_ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();

        let expired = entries.get(key).map(|entry| entry.is_expired());
        match expired {
            Some(true) => {
                entries.remove(key);
                self.stats.expired_count.fetch_add(1, Ordering::SeqCst);
                self.stats.miss_count.fetch_add(1, Ordering::SeqCst);
                None
            }
            Some(false) => {
                self.stats.hit_count.fetch_add(1, Ordering::SeqCst);
                entries.get(key).map(|entry| entry.value.clone())
            }
            None => {
                self.stats.miss_count.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    // Drops every entry whose key starts with the prefix, returns how many went
    pub fn invalidate(&self, prefix: &str) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();

        self.stats
            .invalidated_count
            .fetch_add(removed, Ordering::SeqCst);
        removed
    }

    pub fn stats(&self) -> CacheStatsReport {
        CacheStatsReport {
            items_count: self.entries.lock().len(),
            hit_count: self.stats.hit_count.load(Ordering::SeqCst),
            miss_count: self.stats.miss_count.load(Ordering::SeqCst),
            expired_count: self.stats.expired_count.load(Ordering::SeqCst),
            invalidated_count: self.stats.invalidated_count.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hit_and_miss() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("/jobs"), None::<Vec<u32>>);

        cache.store("/jobs", vec![1, 2, 3]);
        assert_eq!(cache.get("/jobs"), Some(vec![1, 2, 3]));

        let stats = cache.stats();
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.items_count, 1);
    }

    #[test]
    fn test_expiration() {
        let cache = ResponseCache::new(Duration::from_millis(50));
        cache.store("/cars", "fleet".to_string());
        assert!(cache.get("/cars").is_some());

        thread::sleep(Duration::from_millis(120));

        assert!(cache.get("/cars").is_none());
        let stats = cache.stats();
        assert_eq!(stats.expired_count, 1);
        assert_eq!(stats.items_count, 0);
    }

    #[test]
    fn test_invalidate_by_prefix() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.store("/cars", 1);
        cache.store("/cars/101", 2);
        cache.store("/jobs", 3);

        assert_eq!(cache.invalidate("/cars"), 2);
        assert!(cache.get("/cars/101").is_none());
        assert_eq!(cache.get("/jobs"), Some(3));
        assert_eq!(cache.stats().invalidated_count, 2);
    }
}
