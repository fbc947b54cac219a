//! Cache Store Module
//!
//! Main cache engine: an ordered item list searched by caller-defined key
//! equality, with expired items removed lazily on reads and explicit sweeps.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheKey, CacheStats, Item};
use crate::config::CacheConfig;

#[derive(Debug)]
struct Inner<V> {
    /// Items in insertion order
    items: Vec<Item<V>>,
    stats: CacheStats,
}

// == Cache Store ==
/// Thread-safe cache with a single cache-wide expiration duration.
///
/// Every operation takes one exclusive lock for its whole duration. Lookups
/// are linear scans using [`CacheKey::equals`], so keys never need to be
/// hashable. Share a cache between threads with `Arc<Cache<V>>`.
///
/// # Example
/// ```
/// use lazy_cache::Cache;
/// use std::time::Duration;
///
/// let cache = Cache::new(Duration::ZERO);
/// cache.set("k1", "a");
/// cache.set("k2", "b");
/// cache.set("k1", "c");
///
/// assert_eq!(cache.item_count(), 2);
/// assert_eq!(cache.get(&"k1").map(|item| item.value), Some("c"));
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    inner: Mutex<Inner<V>>,
    /// Time-to-live applied on every write, zero = never expire
    expiration: Duration,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache. A zero `expiration` disables expiration for
    /// the lifetime of the cache.
    pub fn new(expiration: Duration) -> Self {
        debug!(?expiration, "Creating cache");
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                stats: CacheStats::new(),
            }),
            expiration,
        }
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.expiration)
    }

    /// Returns the configured expiration duration.
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    // == Set ==
    /// Stores a value under `key`.
    ///
    /// If an item with an equal key exists its value is overwritten and its
    /// deadline pushed out, keeping the original key and position. If that
    /// item had already expired it is evicted instead and the new item is
    /// appended.
    pub fn set<K: CacheKey>(&self, key: K, value: V) {
        self.set_shared(Arc::new(key), value);
    }

    /// Same as [`Cache::set`] for a key the caller already holds in an `Arc`.
    pub fn set_shared(&self, key: Arc<dyn CacheKey>, value: V) {
        let mut guard = self.inner.lock();
        let now = Instant::now();
        let inner = &mut *guard;

        match position(&inner.items, &*key) {
            Some(index) if inner.items[index].is_expired_at(now) => {
                trace!(?key, index, "Replacing expired item");
                inner.items.remove(index);
                inner.stats.record_evictions(1);
                inner.items.push(Item::new(key, value, self.expiration, now));
            }
            Some(index) => {
                trace!(?key, index, "Overwriting item");
                inner.items[index].refresh(value, self.expiration, now);
            }
            None => {
                trace!(?key, "Appending item");
                inner.items.push(Item::new(key, value, self.expiration, now));
            }
        }
    }

    // == Delete ==
    /// Removes the first item whose key equals `key`. Does nothing if there
    /// is no such item.
    pub fn delete(&self, key: &dyn CacheKey) {
        let mut guard = self.inner.lock();

        if let Some(index) = position(&guard.items, key) {
            trace!(?key, index, "Deleting item");
            guard.items.remove(index);
        }
    }

    // == Delete All ==
    /// Removes every item.
    pub fn delete_all(&self) {
        let mut guard = self.inner.lock();

        if !guard.items.is_empty() {
            debug!(removed = guard.items.len(), "Clearing cache");
            guard.items.clear();
        }
    }

    // == Evict ==
    /// Removes every expired item, keeping the rest in order.
    ///
    /// Returns the number of items removed, which callers are free to ignore.
    /// Nothing calls this automatically.
    pub fn evict(&self) -> usize {
        let mut guard = self.inner.lock();
        let now = Instant::now();
        let inner = &mut *guard;

        let removed = remove_expired(&mut inner.items, now);
        inner.stats.record_evictions(removed);
        removed
    }

    // == Item Count ==
    /// Returns the number of stored items.
    ///
    /// Expired items that no read or sweep has removed yet are still counted.
    pub fn item_count(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Returns true if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let guard = self.inner.lock();
        let mut stats = guard.stats.clone();
        stats.total_entries = guard.items.len();
        stats
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Retrieves the item whose key equals `key`.
    ///
    /// An expired match is removed and reported as absent.
    pub fn get(&self, key: &dyn CacheKey) -> Option<Item<V>> {
        let mut guard = self.inner.lock();
        let now = Instant::now();
        let inner = &mut *guard;

        let Some(index) = position(&inner.items, key) else {
            inner.stats.record_miss();
            return None;
        };

        if inner.items[index].is_expired_at(now) {
            debug!(?key, "Evicting expired item on read");
            inner.items.remove(index);
            inner.stats.record_evictions(1);
            inner.stats.record_miss();
            return None;
        }

        inner.stats.record_hit();
        Some(inner.items[index].clone())
    }

    // == Get All ==
    /// Returns copies of all live items in insertion order, removing any
    /// expired items on the way.
    pub fn get_all(&self) -> Vec<Item<V>> {
        let mut guard = self.inner.lock();
        let now = Instant::now();
        let inner = &mut *guard;

        let removed = remove_expired(&mut inner.items, now);
        inner.stats.record_evictions(removed);
        inner.items.to_vec()
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

fn position<V>(items: &[Item<V>], key: &dyn CacheKey) -> Option<usize> {
    items.iter().position(|item| item.key.equals(Some(key)))
}

fn remove_expired<V>(items: &mut Vec<Item<V>>, now: Instant) -> usize {
    let before = items.len();
    items.retain(|item| !item.is_expired_at(now));

    let removed = before - items.len();
    if removed > 0 {
        debug!(removed, remaining = items.len(), "Evicted expired items");
    }
    removed
}
