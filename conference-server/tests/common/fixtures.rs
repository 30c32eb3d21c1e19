//! Test fixtures and data for router tests

use conference_server::services::Snapshot;
use shared::{
    Conference, ConferenceId, EntityKey, EntityKind, Profile, ProfileId, Session, Speaker, SpeakerId,
    TeeShirtSize,
};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const ORGANIZER: &'static str = "ada@example.com";
    pub const RUSTCONF: &'static str = "c1";
    pub const EURORUST: &'static str = "c2";

    pub const RUSTCONF_FEATURED: &'static str =
        "FEATURED SPEAKERS & SESSIONS ON THIS CONFERENCE --  FEATURED 1: Alice SESSIONS: Ownership, Lifetimes, Async";

    pub fn conference(id: &str, name: &str, seats_available: Option<u32>) -> Conference {
        Conference {
            id: ConferenceId::from(id),
            organizer_user_id: ProfileId::from(Self::ORGANIZER),
            name: name.to_string(),
            description: None,
            topics: vec!["Rust".to_string()],
            city: Some("Portland".to_string()),
            start_date: None,
            end_date: None,
            month: None,
            max_attendees: Some(200),
            seats_available,
        }
    }

    pub fn session(conference: &str, id: &str, name: &str, speakers: &[&str]) -> Session {
        Session::new(
            id,
            ConferenceId::from(conference),
            name,
            speakers.iter().map(|s| SpeakerId::from(*s)).collect(),
        )
    }

    /// RustConf has 3 seats left and Alice presents three of its sessions
    pub fn snapshot() -> Snapshot {
        Snapshot {
            profiles: vec![Profile {
                id: ProfileId::from(Self::ORGANIZER),
                display_name: Some("Ada".to_string()),
                main_email: Some(Self::ORGANIZER.to_string()),
                tee_shirt_size: TeeShirtSize::NotSpecified,
                conference_keys_to_attend: vec![],
                sessions_keys_on_wishlist: vec![],
            }],
            conferences: vec![
                Self::conference(Self::RUSTCONF, "RustConf", Some(3)),
                Self::conference(Self::EURORUST, "EuroRust", Some(120)),
            ],
            sessions: vec![
                Self::session(Self::RUSTCONF, "s1", "Ownership", &["A", "B"]),
                Self::session(Self::EURORUST, "s9", "Traits", &["B"]),
                Self::session(Self::RUSTCONF, "s2", "Lifetimes", &["A"]),
                Self::session(Self::RUSTCONF, "s3", "Async", &["A", "C"]),
            ],
            speakers: vec![
                Speaker::new("C", "Carl"),
                Speaker::new("A", "Alice"),
                Speaker::new("B", "Bob"),
            ],
        }
    }

    /// Websafe key of a conference organized by [`Self::ORGANIZER`]
    pub fn conference_key(conference: &str) -> String {
        EntityKey::new(EntityKind::Profile, Self::ORGANIZER)
            .child(EntityKind::Conference, conference)
            .to_websafe()
    }
}
