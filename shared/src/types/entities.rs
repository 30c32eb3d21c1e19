//! Entity schema: profiles, conferences, sessions and speakers
//!
//! Sessions reference their conference by id and their speakers by id.
//! Nothing here enforces that those ids resolve.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::keys::{EntityKey, EntityKind};
use super::{ConferenceId, ProfileId, SessionId, SpeakerId};

/// Seats left at or below which a conference counts as nearly sold out
pub const NEARLY_SOLD_OUT_SEATS: u32 = 5;

/// T-shirt size enumeration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeeShirtSize {
    #[default]
    NotSpecified,
    XsM,
    XsW,
    SM,
    SW,
    MM,
    MW,
    LM,
    LW,
    XlM,
    XlW,
    XxlM,
    XxlW,
    XxxlM,
    XxxlW,
}

/// Session type enumeration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeOfSession {
    #[default]
    #[serde(rename = "NOT_SPECIFIED")]
    NotSpecified,
    Workshop,
    Lecture,
    Keynote,
    Information,
    Networking,
}

/// User profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub main_email: Option<String>,
    #[serde(default)]
    pub tee_shirt_size: TeeShirtSize,
    #[serde(default)]
    pub conference_keys_to_attend: Vec<String>,
    #[serde(default)]
    pub sessions_keys_on_wishlist: Vec<String>,
}

impl Profile {
    pub fn key(&self) -> EntityKey {
        EntityKey::new(EntityKind::Profile, self.id.as_str())
    }
}

/// Conference, owned by the profile that organizes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: ConferenceId,
    pub organizer_user_id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub seats_available: Option<u32>,
}

impl Conference {
    /// Websafe key path: `Profile:<organizer>/Conference:<id>`
    pub fn key(&self) -> EntityKey {
        EntityKey::new(EntityKind::Profile, self.organizer_user_id.as_str())
            .child(EntityKind::Conference, self.id.as_str())
    }

    /// True when some, but at most [`NEARLY_SOLD_OUT_SEATS`], seats remain
    pub fn is_nearly_sold_out(&self) -> bool {
        matches!(self.seats_available, Some(seats) if seats > 0 && seats <= NEARLY_SOLD_OUT_SEATS)
    }
}

/// Session as part of a conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub conference_id: ConferenceId,
    pub name: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, alias = "speakers")]
    pub speaker_ids: Vec<SpeakerId>,
    #[serde(default)]
    pub duration: Option<NaiveTime>,
    #[serde(default)]
    pub type_of_session: TypeOfSession,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Session {
    /// Minimal session with a name and speaker list
    pub fn new(
        id: impl Into<String>,
        conference_id: ConferenceId,
        name: impl Into<String>,
        speaker_ids: Vec<SpeakerId>,
    ) -> Self {
        Self {
            id: SessionId::new(id),
            conference_id,
            name: name.into(),
            highlights: Vec::new(),
            speaker_ids,
            duration: None,
            type_of_session: TypeOfSession::default(),
            date: None,
            start_time: None,
            location: None,
        }
    }

    /// Whether the speaker is listed on this session (duplicates count once)
    pub fn has_speaker(&self, speaker: &SpeakerId) -> bool {
        self.speaker_ids.contains(speaker)
    }
}

/// A speaker can speak at multiple conferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: SpeakerId,
    pub name: String,
}

impl Speaker {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: SpeakerId::new(id),
            name: name.into(),
        }
    }

    pub fn key(&self) -> EntityKey {
        EntityKey::new(EntityKind::Speaker, self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conference(seats: Option<u32>) -> Conference {
        Conference {
            id: ConferenceId::from("c1"),
            organizer_user_id: ProfileId::from("ada@example.com"),
            name: "RustConf".to_string(),
            description: None,
            topics: vec![],
            city: None,
            start_date: None,
            end_date: None,
            month: None,
            max_attendees: Some(100),
            seats_available: seats,
        }
    }

    #[test]
    fn test_nearly_sold_out_bounds() {
        assert!(!conference(None).is_nearly_sold_out());
        assert!(!conference(Some(0)).is_nearly_sold_out());
        assert!(conference(Some(1)).is_nearly_sold_out());
        assert!(conference(Some(5)).is_nearly_sold_out());
        assert!(!conference(Some(6)).is_nearly_sold_out());
    }

    #[test]
    fn test_conference_key_has_organizer_parent() {
        let key = conference(None).key();
        assert_eq!(key.kind(), EntityKind::Conference);
        assert_eq!(key.id(), "c1");
        assert_eq!(key.parent().map(|p| p.id().to_string()), Some("ada@example.com".to_string()));
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&TeeShirtSize::XxxlW).unwrap(), "\"XXXL_W\"");
        assert_eq!(serde_json::to_string(&TeeShirtSize::NotSpecified).unwrap(), "\"NOT_SPECIFIED\"");
        assert_eq!(serde_json::to_string(&TypeOfSession::Keynote).unwrap(), "\"Keynote\"");
        assert_eq!(serde_json::to_string(&TypeOfSession::NotSpecified).unwrap(), "\"NOT_SPECIFIED\"");
    }

    #[test]
    fn test_session_accepts_legacy_speakers_field() {
        let json = r#"{
            "id": "s1",
            "conferenceId": "c1",
            "name": "Ownership 101",
            "speakers": ["a", "b"],
            "typeOfSession": "Workshop",
            "startTime": "09:30:00"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.speaker_ids, vec![SpeakerId::from("a"), SpeakerId::from("b")]);
        assert_eq!(session.type_of_session, TypeOfSession::Workshop);
        assert!(session.has_speaker(&SpeakerId::from("b")));
        assert!(!session.has_speaker(&SpeakerId::from("c")));
    }

    #[test]
    fn test_profile_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"id": "ada@example.com"}"#).unwrap();
        assert_eq!(profile.tee_shirt_size, TeeShirtSize::NotSpecified);
        assert!(profile.conference_keys_to_attend.is_empty());
        assert_eq!(profile.key().to_string(), "Profile:ada@example.com");
    }
}
