//! Outbound response messages

use serde::{Deserialize, Serialize};

/// Single string payload, `{"data": "..."}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StringMessage {
    pub data: String,
}

impl From<Option<String>> for StringMessage {
    fn from(value: Option<String>) -> Self {
        Self { data: value.unwrap_or_default() }
    }
}
