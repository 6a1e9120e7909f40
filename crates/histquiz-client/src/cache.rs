//! The one-hour lesson-list cache.
//!
//! A single JSON file under the cache directory holds the last fetched
//! list together with its fetch timestamp — the fixed-key slot the views
//! consult before touching the network. Anything wrong with the entry
//! (missing, unreadable, unparseable, stale) falls through to a fresh
//! fetch; cache trouble never reaches the user.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use histquiz_core::model::Lesson;

const CACHE_FILE: &str = "lessons.json";

/// Default freshness window for a cached lesson list, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// On-disk shape of the cache slot.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unix timestamp (seconds) of the fetch that produced `lessons`.
    pub timestamp: i64,
    /// The sorted lesson list as fetched.
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    timestamp: i64,
    lessons: &'a [Lesson],
}

/// File-backed cache for the lesson list.
pub struct LessonCache {
    path: PathBuf,
    ttl_secs: u64,
}

impl LessonCache {
    pub fn new(dir: &Path, ttl_secs: u64) -> Self {
        Self {
            path: dir.join(CACHE_FILE),
            ttl_secs,
        }
    }

    /// Lessons from a fresh cache entry, or `None` when the entry is
    /// missing, unreadable, or outside the freshness window.
    pub fn load_fresh(&self) -> Option<Vec<Lesson>> {
        self.load_fresh_at(Utc::now())
    }

    pub(crate) fn load_fresh_at(&self, now: DateTime<Utc>) -> Option<Vec<Lesson>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("no cache entry at {}: {e}", self.path.display());
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("ignoring corrupt cache entry: {e}");
                return None;
            }
        };

        let age = now.timestamp() - entry.timestamp;
        if age >= self.ttl_secs as i64 {
            tracing::debug!("cache entry is stale ({age}s old)");
            return None;
        }

        Some(entry.lessons)
    }

    /// Write a fresh entry for `lessons`. The cache is best-effort; the
    /// caller decides whether a failure is worth logging.
    pub fn store(&self, lessons: &[Lesson]) -> std::io::Result<()> {
        self.store_at(lessons, Utc::now())
    }

    pub(crate) fn store_at(&self, lessons: &[Lesson], now: DateTime<Utc>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&CacheEntryRef {
            timestamp: now.timestamp(),
            lessons,
        })?;
        std::fs::write(&self.path, json)
    }
}
