//! Service trait definitions for dependency injection
//!
//! Persistence, caching, mail delivery and announcement computation are all
//! reached through these traits so handlers can be tested with mocks.

use async_trait::async_trait;

use shared::{Conference, ConferenceId};
use crate::error::ServerResult;
use crate::types::{ConferenceRoster, OutgoingEmail};

/// Persistence boundary
#[mockall::automock]
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Resolve a websafe conference key to the id of an existing conference
    async fn resolve_conference(&self, websafe_key: &str) -> ServerResult<ConferenceId>;

    /// Sessions of one conference together with every registered speaker,
    /// both taken from the same consistent view
    async fn conference_roster(&self, conference: &ConferenceId) -> ServerResult<ConferenceRoster>;

    /// Every conference
    async fn all_conferences(&self) -> ServerResult<Vec<Conference>>;
}

/// Shared string-keyed cache
#[mockall::automock]
#[async_trait]
pub trait AnnouncementCache: Send + Sync {
    async fn get(&self, key: &str) -> ServerResult<Option<String>>;

    /// Overwrite the entry under `key`
    async fn set(&self, key: &str, value: String) -> ServerResult<()>;

    /// Remove the entry under `key`; removing a missing key succeeds
    async fn delete(&self, key: &str) -> ServerResult<()>;
}

/// Outbound mail delivery
#[mockall::automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> ServerResult<()>;
}

/// Computes the process-wide announcement, `None` when there is nothing to say
#[mockall::automock]
#[async_trait]
pub trait AnnouncementSource: Send + Sync {
    async fn current_announcement(&self) -> ServerResult<Option<String>>;
}
