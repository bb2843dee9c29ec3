use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::types::CachedHttpResponse;
use crate::constants::cache_ttl::RESPONSE_CACHE_CAPACITY;

// LRU cache for RPC responses, keyed by URL plus request body
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        let capacity = NonZeroUsize::new(RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        RwLock::new(LruCache::new(capacity))
    });

/// Builds the cache key for a POST request. Two calls to the same method with
/// different bodies are different entries.
pub fn response_cache_key(url: &str, body: &str) -> String {
    format!("{url}\n{body}")
}

/// Caches a response body with TTL
#[instrument(skip(key, data))]
pub async fn cache_http_response(key: String, data: String, ttl_seconds: u64) {
    debug!(
        "Caching response: data_size={}, ttl={}s",
        data.len(),
        ttl_seconds
    );

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    HTTP_RESPONSE_CACHE.write().await.put(key, cached_data);
}

/// Retrieves a cached response body if it's not expired
#[instrument(skip(key))]
pub async fn get_cached_http_response(key: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    match cache.get(key) {
        Some(entry) if !entry.is_expired() => {
            debug!(
                "Cache hit: data_size={}, expires_in={:?}",
                entry.data.len(),
                entry.time_until_expiry()
            );
            return Some(entry.data.clone());
        }
        Some(entry) => {
            warn!(
                "Removing expired response cache entry: age={:?}, ttl={:?}",
                entry.cached_at.elapsed(),
                entry.ttl()
            );
        }
        None => {
            debug!("Cache miss");
            return None;
        }
    }

    cache.pop(key);
    None
}

/// Gets the current response cache size for monitoring purposes
pub async fn get_http_response_cache_size() -> usize {
    HTTP_RESPONSE_CACHE.read().await.len()
}

/// Clears all response cache entries. Called after every successful mutation.
pub async fn clear_http_response_cache() {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    let dropped = cache.len();
    cache.clear();
    debug!("Cleared {dropped} cached responses");
}
