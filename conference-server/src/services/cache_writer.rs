//! Announcement cache writer
//!
//! Owns the two namespaces in the shared cache: the process-wide
//! announcement and the per-conference featured speaker entries.

use std::sync::Arc;
use tracing::debug;

use shared::ConferenceId;
use crate::error::ServerResult;
use crate::traits::AnnouncementCache;
use crate::types::{FEATURED_KEY_PREFIX, GLOBAL_ANNOUNCEMENT_KEY};

/// Cache key of the featured speaker entry of one conference
pub fn featured_key(conference: &ConferenceId) -> String {
    format!("{FEATURED_KEY_PREFIX}{conference}")
}

/// Writes and reads announcements through an injected cache
pub struct AnnouncementCacheWriter<C> {
    cache: Arc<C>,
}

impl<C> Clone for AnnouncementCacheWriter<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: AnnouncementCache> AnnouncementCacheWriter<C> {
    pub fn new(cache: C) -> Self {
        Self { cache: Arc::new(cache) }
    }

    /// Overwrite the process-wide announcement
    pub async fn set_global_announcement(&self, text: String) -> ServerResult<()> {
        debug!("Caching global announcement ({} chars)", text.len());
        self.cache.set(GLOBAL_ANNOUNCEMENT_KEY, text).await
    }

    pub async fn clear_global_announcement(&self) -> ServerResult<()> {
        debug!("Clearing global announcement");
        self.cache.delete(GLOBAL_ANNOUNCEMENT_KEY).await
    }

    pub async fn global_announcement(&self) -> ServerResult<Option<String>> {
        self.cache.get(GLOBAL_ANNOUNCEMENT_KEY).await
    }

    /// Store the featured speaker text of a conference.
    ///
    /// Empty text deletes the entry; the cache never holds an empty value.
    pub async fn set_featured_speakers(&self, conference: &ConferenceId, text: String) -> ServerResult<()> {
        let key = featured_key(conference);
        if text.is_empty() {
            debug!("No featured speakers for {}, deleting {}", conference, key);
            self.cache.delete(&key).await
        } else {
            debug!("Caching featured speakers under {}", key);
            self.cache.set(&key, text).await
        }
    }

    pub async fn featured_speakers(&self, conference: &ConferenceId) -> ServerResult<Option<String>> {
        self.cache.get(&featured_key(conference)).await
    }
}
