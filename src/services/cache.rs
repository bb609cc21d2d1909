// src/services/cache.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::league::error::ChampionshipError;

/// Injected cache seam for the derived computations. Entries are JSON-encoded
/// values keyed by championship id plus computation name; an entry is either
/// fully present and fresh or absent, never partial.
pub trait ComputationCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String, ttl: Duration);
    fn invalidate(&self, key: &str);
}

/// Cache key for a championship-scoped computation
pub fn cache_key(championship_id: Uuid, computation: &str) -> String {
    format!("championship:{}:{}", championship_id, computation)
}

/// Read-through helper: returns the cached value when fresh, otherwise runs
/// the computation and stores its JSON encoding. An unreadable entry is
/// discarded and recomputed rather than surfaced to the caller.
pub fn cached<T, F>(
    cache: &dyn ComputationCache,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, ChampionshipError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Result<T, ChampionshipError>,
{
    if let Some(raw) = cache.get(key) {
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!("Cache hit for {}", key);
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable cache entry {}: {}", key, e);
                cache.invalidate(key);
            }
        }
    }

    let value = compute()?;
    cache.set(key, serde_json::to_string(&value)?, ttl);
    Ok(value)
}

/// In-process TTL cache backing `ComputationCache`.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputationCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Some(entry.value.clone());
            }
            Some(_) => {}
            None => return None,
        }
        // Lazily drop the expired entry.
        entries.remove(key);
        None
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.remove(key);
    }
}
