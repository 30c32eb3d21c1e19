//! In-memory datastore
//!
//! Holds a snapshot of profiles, conferences, sessions and speakers behind a
//! single lock. Can be seeded from a JSON file at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared::{Conference, ConferenceId, EntityKey, Profile, Session, Speaker};
use crate::error::{ServerError, ServerResult};
use crate::traits::Datastore;
use crate::types::ConferenceRoster;

/// Full contents of the datastore
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub conferences: Vec<Conference>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

/// Datastore backed by process memory
#[derive(Clone, Default)]
pub struct InMemoryDatastore {
    snapshot: Arc<RwLock<Snapshot>>,
}

impl InMemoryDatastore {
    /// Create an empty datastore
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Load a JSON snapshot from disk
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        info!(
            "📂 Loaded seed {}: {} conferences, {} sessions, {} speakers",
            path.display(),
            snapshot.conferences.len(),
            snapshot.sessions.len(),
            snapshot.speakers.len()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn insert_conference(&self, conference: Conference) {
        let mut snapshot = self.snapshot.write().await;
        upsert(&mut snapshot.conferences, conference, |a, b| a.id == b.id);
    }

    /// Insert or replace a session; a replaced session keeps its position
    pub async fn insert_session(&self, session: Session) {
        let mut snapshot = self.snapshot.write().await;
        upsert(&mut snapshot.sessions, session, |a, b| {
            a.id == b.id && a.conference_id == b.conference_id
        });
    }

    pub async fn insert_speaker(&self, speaker: Speaker) {
        let mut snapshot = self.snapshot.write().await;
        upsert(&mut snapshot.speakers, speaker, |a, b| a.id == b.id);
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter().position(|existing| same(existing, &item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

#[async_trait]
impl Datastore for InMemoryDatastore {
    async fn resolve_conference(&self, websafe_key: &str) -> ServerResult<ConferenceId> {
        let key = EntityKey::from_websafe(websafe_key)?;
        let (organizer, conference_id) = key.conference_parts()?;

        let snapshot = self.snapshot.read().await;
        let found = snapshot.conferences.iter().find(|conference| {
            conference.id.as_str() == conference_id
                && organizer.is_none_or(|organizer| conference.organizer_user_id.as_str() == organizer)
        });

        match found {
            Some(conference) => {
                debug!("Resolved {} to conference {}", key, conference.id);
                Ok(conference.id.clone())
            }
            None => Err(ServerError::ConferenceNotFound { key: key.to_string() }),
        }
    }

    async fn conference_roster(&self, conference: &ConferenceId) -> ServerResult<ConferenceRoster> {
        let snapshot = self.snapshot.read().await;
        Ok(ConferenceRoster {
            sessions: snapshot
                .sessions
                .iter()
                .filter(|session| &session.conference_id == conference)
                .cloned()
                .collect(),
            speakers: snapshot.speakers.clone(),
        })
    }

    async fn all_conferences(&self) -> ServerResult<Vec<Conference>> {
        Ok(self.snapshot.read().await.conferences.clone())
    }
}
