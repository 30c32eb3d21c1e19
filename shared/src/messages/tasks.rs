//! Task queue payloads
//!
//! Both tasks arrive as `application/x-www-form-urlencoded` bodies. Fields
//! default to empty so that a missing parameter is reported by the handler
//! rather than by the extractor.

use serde::{Deserialize, Serialize};

/// Body of `POST /tasks/check_speakers`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CheckSpeakersTask {
    /// Websafe key of the conference to re-evaluate
    #[serde(rename = "conferenceKey", alias = "c_key_str", default)]
    pub conference_key: String,
}

/// Body of `POST /tasks/send_confirmation_email`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConfirmationEmailTask {
    /// Destination address
    #[serde(default)]
    pub email: String,
    /// Free-text description of the new conference
    #[serde(rename = "conferenceInfo", default)]
    pub conference_info: String,
}
