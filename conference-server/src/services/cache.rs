//! Moka-backed announcement cache

use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;

use shared::CacheConfig;
use crate::error::ServerResult;
use crate::traits::AnnouncementCache;

/// Process-local implementation of the shared announcement cache
#[derive(Clone)]
pub struct MokaAnnouncementCache {
    cache: Cache<String, String>,
}

impl MokaAnnouncementCache {
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.max_capacity);
        if let Some(ttl) = config.ttl_seconds {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Self { cache: builder.build() }
    }
}

#[async_trait]
impl AnnouncementCache for MokaAnnouncementCache {
    async fn get(&self, key: &str) -> ServerResult<Option<String>> {
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> ServerResult<()> {
        self.cache.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> ServerResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }
}
