//! Process-wide matchup cache with TTL-based expiry.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::domain::{Matchup, PokemonName};

/// A cached matchup with its absolute expiry time.
#[derive(Debug, Clone)]
struct CacheEntry {
    matchup: Matchup,
    expires_at: DateTime<Utc>,
}

/// In-memory cache keyed by normalized subject name.
///
/// Constructed once at startup and shared by `Arc`. Entries are full
/// overwrites; two racing requests for the same uncached subject both do
/// the upstream work and the last writer wins.
#[derive(Debug)]
pub struct MatchupCache {
    entries: RwLock<HashMap<PokemonName, CacheEntry>>,
    ttl: Duration,
}

impl MatchupCache {
    /// Create a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a cache with a TTL given in seconds.
    #[must_use]
    pub fn with_ttl_seconds(seconds: u64) -> Self {
        Self::new(Duration::seconds(seconds as i64))
    }

    /// Look up a subject, evicting the entry if it has expired.
    ///
    /// An entry is valid while `now <= expires_at`.
    #[must_use]
    pub fn get(&self, name: &PokemonName) -> Option<Matchup> {
        let now = Utc::now();

        {
            let entries = self.entries.read();
            match entries.get(name) {
                None => return None,
                Some(entry) if entry.expires_at >= now => return Some(entry.matchup.clone()),
                Some(_) => {}
            }
        }

        // Expired: evict under the write lock, re-checking in case a racing
        // writer replaced the entry in between.
        let mut entries = self.entries.write();
        if entries.get(name).is_some_and(|e| e.expires_at < now) {
            entries.remove(name);
        }
        None
    }

    /// Store a result, replacing any previous entry for the subject.
    pub fn put(&self, name: PokemonName, matchup: Matchup) {
        let entry = CacheEntry {
            matchup,
            expires_at: Utc::now() + self.ttl,
        };
        self.entries.write().insert(name, entry);
    }

    /// Number of entries currently stored, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
