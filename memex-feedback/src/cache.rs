use std::collections::HashMap;
use std::time::Duration;

use memex_core::config::FeedbackConfig;
use memex_core::errors::MemexResult;
use memex_core::models::FeedbackScore;
use memex_core::traits::IFeedbackStore;
use memex_core::EntryKey;
use moka::sync::Cache;
use tracing::debug;

/// In-memory feedback cache backed by moka.
///
/// Size-bounded with an optional time-to-live. Entries change only through
/// [`set`](Self::set), [`load_batch`](Self::load_batch) and
/// [`refresh_batch`](Self::refresh_batch).
pub struct FeedbackCache {
    cache: Cache<EntryKey, FeedbackScore>,
}

impl FeedbackCache {
    /// A cache holding at most `capacity` keys. A zero `ttl` disables expiry.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let mut builder = Cache::builder().max_capacity(capacity);
        if !ttl.is_zero() {
            builder = builder.time_to_live(ttl);
        }
        Self {
            cache: builder.build(),
        }
    }

    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    /// Cached counters for `key`, if loaded.
    pub fn get(&self, key: &EntryKey) -> Option<FeedbackScore> {
        self.cache.get(key)
    }

    /// Cached counters for `key`, all-zero when absent.
    pub fn get_or_default(&self, key: &EntryKey) -> FeedbackScore {
        self.get(key).unwrap_or_default()
    }

    pub fn set(&self, key: EntryKey, score: FeedbackScore) {
        self.cache.insert(key, score);
    }

    /// Counters for every key in `keys`, asking `store` only for the ones
    /// not cached yet.
    pub async fn load_batch(
        &self,
        keys: &[EntryKey],
        store: &dyn IFeedbackStore,
    ) -> MemexResult<HashMap<EntryKey, FeedbackScore>> {
        let mut out = HashMap::with_capacity(keys.len());
        let mut missing = Vec::new();
        for key in keys {
            match self.cache.get(key) {
                Some(score) => {
                    out.insert(key.clone(), score);
                }
                None if !missing.contains(key) => missing.push(key.clone()),
                None => {}
            }
        }

        if !missing.is_empty() {
            debug!(
                requested = keys.len(),
                missing = missing.len(),
                "loading feedback batch"
            );
            self.fetch_into(&missing, store, &mut out).await?;
        }
        Ok(out)
    }

    /// Reload every key in `keys` from `store`, replacing cached values.
    pub async fn refresh_batch(
        &self,
        keys: &[EntryKey],
        store: &dyn IFeedbackStore,
    ) -> MemexResult<HashMap<EntryKey, FeedbackScore>> {
        let mut out = HashMap::with_capacity(keys.len());
        self.fetch_into(keys, store, &mut out).await?;
        Ok(out)
    }

    async fn fetch_into(
        &self,
        keys: &[EntryKey],
        store: &dyn IFeedbackStore,
        out: &mut HashMap<EntryKey, FeedbackScore>,
    ) -> MemexResult<()> {
        let mut loaded = store.load_feedback(keys).await?;
        for key in keys {
            let score = loaded.remove(key).unwrap_or_default();
            self.cache.insert(key.clone(), score);
            out.insert(key.clone(), score);
        }
        Ok(())
    }

    pub fn invalidate(&self, key: &EntryKey) {
        self.cache.invalidate(key);
    }

    /// Number of entries currently in the cache. May lag recent writes.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for FeedbackCache {
    fn default() -> Self {
        Self::from_config(&FeedbackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use memex_core::EntryType;

    use super::*;

    fn key(id: &str) -> EntryKey {
        EntryKey::new(EntryType::Knowledge, id)
    }

    #[test]
    fn set_and_get() {
        let cache = FeedbackCache::default();
        cache.set(key("a"), FeedbackScore::new(3, 1));
        assert_eq!(cache.get(&key("a")), Some(FeedbackScore::new(3, 1)));
    }

    #[test]
    fn miss_defaults_to_zero() {
        let cache = FeedbackCache::default();
        assert_eq!(cache.get(&key("nope")), None);
        assert!(cache.get_or_default(&key("nope")).is_neutral());
    }

    #[test]
    fn invalidate_and_clear() {
        let cache = FeedbackCache::new(10, Duration::ZERO);
        cache.set(key("a"), FeedbackScore::new(1, 0));
        cache.set(key("b"), FeedbackScore::new(0, 1));
        cache.invalidate(&key("a"));
        assert_eq!(cache.get(&key("a")), None);
        cache.clear();
        assert_eq!(cache.get(&key("b")), None);
    }
}
