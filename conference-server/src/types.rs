//! Type definitions for the conference server
//!
//! Data types used by the server that are not service traits.

use serde::Serialize;

use shared::{Session, Speaker};

/// Cache key of the process-wide announcement
pub const GLOBAL_ANNOUNCEMENT_KEY: &str = "RECENT_ANNOUNCEMENTS";

/// Namespace prefix of per-conference featured speaker entries
pub const FEATURED_KEY_PREFIX: &str = "FEATURED:";

/// Sessions of one conference and every speaker, read from one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceRoster {
    /// In the conference's session order
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
}

/// A fully rendered plain-text email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Task names used in log fields
pub mod task {
    pub const CHECK_SPEAKERS: &str = "check_speakers";
    pub const SET_ANNOUNCEMENT: &str = "set_announcement";
    pub const SEND_CONFIRMATION_EMAIL: &str = "send_confirmation_email";
}
