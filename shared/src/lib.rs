//! Shared types for the conference backend
//!
//! Contains the entity schema, websafe entity keys, wire messages and
//! configuration types used by the server crate and its tests.

pub mod types;
pub mod errors;
pub mod logging;
pub mod messages;

pub use types::*;
pub use errors::*;

pub use messages::{
    // Task queue / cron payloads
    CheckSpeakersTask, ConfirmationEmailTask,

    // Outbound messages
    StringMessage,

    // Configuration types
    ServerConfig, SmtpConfig, CacheConfig,
};
