//! Test helpers for service tests

use shared::CacheConfig;
use crate::services::{AnnouncementCacheWriter, InMemoryDatastore, MokaAnnouncementCache};

use super::fixtures::create_test_snapshot;

/// Datastore pre-loaded with the standard snapshot
pub fn create_test_datastore() -> InMemoryDatastore {
    InMemoryDatastore::from_snapshot(create_test_snapshot())
}

/// Fresh cache writer over an empty moka cache
pub fn create_test_writer() -> AnnouncementCacheWriter<MokaAnnouncementCache> {
    AnnouncementCacheWriter::new(MokaAnnouncementCache::new(&CacheConfig::default()))
}
