//! histquiz-client — the lesson data client.
//!
//! One HTTP GET against the lessons-by-subject endpoint, fronted by a
//! one-hour file cache. A fresh cache entry answers without touching the
//! network; otherwise the list is fetched, sorted most recent first, and
//! the cache rewritten. The cache is written on successful fetch only.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;

pub use api::{HttpLessonSource, LessonSource};
pub use cache::{CacheEntry, LessonCache, DEFAULT_TTL_SECS};
pub use config::{load_config, load_config_from, ClientConfig};
pub use error::FetchError;

use histquiz_core::catalog::sort_most_recent_first;
use histquiz_core::model::Lesson;

/// Cache-fronted access to the lesson list.
pub struct LessonService<S> {
    source: S,
    cache: LessonCache,
}

impl LessonService<HttpLessonSource> {
    /// Service wired from configuration: HTTP source plus file cache.
    pub fn from_config(config: &ClientConfig) -> Self {
        let source = HttpLessonSource::new(
            &config.api_base_url,
            &config.subject,
            config.request_timeout_secs,
        );
        let cache = LessonCache::new(&config.cache_dir(), config.cache_ttl_secs);
        Self::new(source, cache)
    }
}

impl<S: LessonSource> LessonService<S> {
    pub fn new(source: S, cache: LessonCache) -> Self {
        Self { source, cache }
    }

    /// The lesson list, most recent first.
    ///
    /// Served from the cache while its entry is inside the freshness
    /// window; otherwise fetched, sorted, and re-cached.
    pub async fn lessons(&self) -> Result<Vec<Lesson>, FetchError> {
        if let Some(lessons) = self.cache.load_fresh() {
            tracing::debug!(count = lessons.len(), "serving lessons from cache");
            return Ok(lessons);
        }
        self.fetch_and_cache().await
    }

    /// Skip the cache read and fetch fresh. Still rewrites the cache.
    pub async fn refresh(&self) -> Result<Vec<Lesson>, FetchError> {
        self.fetch_and_cache().await
    }

    async fn fetch_and_cache(&self) -> Result<Vec<Lesson>, FetchError> {
        let mut lessons = self.source.fetch_lessons().await?;
        sort_most_recent_first(&mut lessons);

        if let Err(e) = self.cache.store(&lessons) {
            tracing::warn!("failed to write lesson cache: {e}");
        }

        tracing::debug!(count = lessons.len(), "fetched lessons from API");
        Ok(lessons)
    }
}
