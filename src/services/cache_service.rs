use crate::apis::api_models::response::PaginatedPostsResponse;
use crate::utils::clock::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    stored_at: Instant,
    value: PaginatedPostsResponse,
}

/// Time-bounded page cache sitting in front of the feed composer, keyed by
/// filter + page. Entries expire after `ttl` or on an explicit `flush`; the
/// clock is injected so expiry is testable without real waits.
pub struct FeedCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FeedCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<PaginatedPostsResponse> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if now.duration_since(entry.stored_at) < self.ttl => {
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores one page. Every insert also sweeps entries past their window,
    /// so stale keys never accumulate between flushes.
    pub fn insert(&self, key: String, value: PaginatedPostsResponse) {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, entry| now.duration_since(entry.stored_at) < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: now,
                value,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Drops every cached page. Called when a post mutation makes the
    /// listings stale ahead of expiry.
    pub fn flush(&self) {
        debug!("Flushing feed page cache");
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::test_clock::ManualClock;

    fn empty_page() -> PaginatedPostsResponse {
        PaginatedPostsResponse {
            items: vec![],
            total: 0,
            page: 1,
            limit: 10,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        }
    }

    fn cache_with_clock() -> (FeedCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = FeedCache::new(Duration::from_secs(20), clock.clone());
        (cache, clock)
    }

    #[test]
    fn serves_entries_within_the_window() {
        let (cache, clock) = cache_with_clock();
        cache.insert("feed:all:page:1".to_string(), empty_page());
        clock.advance(Duration::from_secs(19));
        assert!(cache.get("feed:all:page:1").is_some());
    }

    #[test]
    fn expires_entries_after_the_window() {
        let (cache, clock) = cache_with_clock();
        cache.insert("feed:all:page:1".to_string(), empty_page());
        clock.advance(Duration::from_secs(20));
        assert!(cache.get("feed:all:page:1").is_none());
    }

    #[test]
    fn insert_sweeps_entries_past_their_window() {
        let (cache, clock) = cache_with_clock();
        for page in 1..=1000 {
            cache.insert(format!("feed:all:page:{}", page), empty_page());
        }
        assert_eq!(cache.len(), 1000);

        clock.advance(Duration::from_secs(3600));
        cache.insert("feed:all:page:1".to_string(), empty_page());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn flush_empties_everything_immediately() {
        let (cache, _clock) = cache_with_clock();
        cache.insert("feed:all:page:1".to_string(), empty_page());
        cache.insert("feed:all:page:2".to_string(), empty_page());
        cache.flush();
        assert!(cache.get("feed:all:page:1").is_none());
        assert!(cache.get("feed:all:page:2").is_none());
    }

    #[test]
    fn keys_are_per_filter_and_page() {
        let (cache, _clock) = cache_with_clock();
        cache.insert("feed:all:page:1".to_string(), empty_page());
        assert!(cache.get("feed:all:page:2").is_none());
        assert!(cache.get("feed:group:g:page:1").is_none());
    }
}
