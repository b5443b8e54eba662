//! Cache for computed listing pages
//!
//! Listing pages are memoized by `(query, page)` in a bounded LRU. An entry
//! lives until the earliest of: its time-to-live runs out (writes made by
//! other processes become visible), it is the least recently used page of a
//! full cache, or a mutation calls [`PageCache::invalidate`].
//!
//! Each invalidation bumps a generation counter; a page computed before the
//! bump is not stored afterwards, so a slow read that races a write cannot
//! repopulate the cache with stale rows.

use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Entry limit; inserting into a full cache evicts the least recently used page.
pub const DEFAULT_CAPACITY: usize = 256;

/// How long a stored page is served before it is recomputed.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

type Key = (String, u32);

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

struct Inner<V> {
    generation: u64,
    entries: LruCache<Key, Entry<V>>,
}

pub struct PageCache<V> {
    ttl: Duration,
    inner: Mutex<Inner<V>>,
}

fn key(query: &str, page: u32) -> Key {
    (query.to_lowercase(), page)
}

impl<V: Clone> PageCache<V> {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            ttl,
            inner: Mutex::new(Inner {
                generation: 0,
                entries: LruCache::new(capacity),
            }),
        }
    }

    /// Fresh page for `(query, page)`, marking it most recently used.
    /// An expired entry is dropped and reported as a miss.
    pub async fn get(&self, query: &str, page: u32) -> Option<V> {
        let key = key(query, page);
        let mut inner = self.inner.lock().await;

        let expired = match inner.entries.get(&key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            inner.entries.pop(&key);
            tracing::debug!(query, page, "listing cache entry expired");
        }
        None
    }

    /// Current generation. Read this before computing a page.
    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation
    }

    /// Store a page computed at `generation`. Returns false if the cache has
    /// been invalidated since.
    pub async fn insert(&self, generation: u64, query: &str, page: u32, value: V) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        let entry = Entry {
            value,
            stored_at: Instant::now(),
        };
        if let Some((evicted, _)) = inner.entries.push(key(query, page), entry) {
            if evicted != key(query, page) {
                tracing::trace!(query = %evicted.0, page = evicted.1, "listing cache evicted page");
            }
        }
        true
    }

    /// Drop every cached page.
    pub async fn invalidate(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        let dropped = inner.entries.len();
        inner.entries.clear();
        tracing::debug!(generation = inner.generation, dropped, "listing cache invalidated");
    }

    /// Stored entries, including expired ones not yet looked up.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }
}

impl<V: Clone> Default for PageCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_returns_pages() {
        let cache = PageCache::default();
        let gen = cache.generation().await;
        assert!(cache.insert(gen, "jane", 1, vec![1, 2]).await);

        assert_eq!(cache.get("jane", 1).await, Some(vec![1, 2]));
        assert_eq!(cache.get("jane", 2).await, None);
    }

    #[tokio::test]
    async fn keys_ignore_case() {
        let cache = PageCache::default();
        cache.insert(0, "Jane", 1, "rows").await;
        assert_eq!(cache.get("JANE", 1).await, Some("rows"));
    }

    #[tokio::test]
    async fn invalidate_clears_entries() {
        let cache = PageCache::default();
        cache.insert(0, "", 1, 10).await;
        cache.invalidate().await;

        assert_eq!(cache.get("", 1).await, None);
        assert_eq!(cache.len().await, 0);
        assert_eq!(cache.generation().await, 1);
    }

    #[tokio::test]
    async fn stale_generation_is_not_stored() {
        let cache = PageCache::default();
        let gen = cache.generation().await;
        cache.invalidate().await;

        assert!(!cache.insert(gen, "", 1, 10).await);
        assert_eq!(cache.get("", 1).await, None);
    }

    #[tokio::test]
    async fn full_cache_evicts_least_recently_used() {
        let cache = PageCache::new(3, DEFAULT_TTL);
        cache.insert(0, "", 1, 0).await;
        cache.insert(0, "a", 1, 1).await;
        cache.insert(0, "b", 1, 2).await;

        // Reading the oldest page makes "a" the eviction candidate
        assert_eq!(cache.get("", 1).await, Some(0));
        cache.insert(0, "c", 1, 3).await;

        assert_eq!(cache.len().await, 3);
        assert_eq!(cache.get("", 1).await, Some(0));
        assert_eq!(cache.get("a", 1).await, None);
        assert_eq!(cache.get("b", 1).await, Some(2));
        assert_eq!(cache.get("c", 1).await, Some(3));
    }

    #[tokio::test]
    async fn reinserting_a_page_replaces_it() {
        let cache = PageCache::new(2, DEFAULT_TTL);
        cache.insert(0, "a", 1, 1).await;
        cache.insert(0, "a", 1, 5).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("a", 1).await, Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let cache = PageCache::new(8, Duration::from_secs(30));
        cache.insert(0, "", 1, "page one").await;

        tokio::time::advance(Duration::from_secs(29)).await;
        assert_eq!(cache.get("", 1).await, Some("page one"));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("", 1).await, None);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_is_counted_from_the_latest_insert() {
        let cache = PageCache::new(8, Duration::from_secs(10));
        cache.insert(0, "", 1, 1).await;

        tokio::time::advance(Duration::from_secs(8)).await;
        cache.insert(0, "", 1, 2).await;
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(cache.get("", 1).await, Some(2));
    }
}
