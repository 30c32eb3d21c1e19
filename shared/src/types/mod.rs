//! Core types used throughout the conference backend

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod entities;
pub mod keys;

pub use entities::{Conference, Profile, Session, Speaker, TeeShirtSize, TypeOfSession};
pub use keys::{EntityKey, EntityKind};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

entity_id!(
    /// Profile identifier (the user's id, usually their main email)
    ProfileId
);
entity_id!(
    /// Conference identifier
    ConferenceId
);
entity_id!(
    /// Session identifier, unique within its conference
    SessionId
);
entity_id!(
    /// Speaker identifier
    SpeakerId
);
