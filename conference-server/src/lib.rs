//! Conference backend server library
//!
//! Task queue and cron handlers that maintain cached announcements for a
//! conference-management backend, plus the adapters they run on.

pub mod core;
pub mod error;
pub mod server;
pub mod services;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{ServerError, ServerResult};
pub use server::ConferenceServer;
pub use types::*;

// Re-export trait definitions
pub use traits::{AnnouncementCache, AnnouncementSource, Datastore, Mailer};

// Re-export service implementations
pub use services::{
    AnnouncementCacheWriter, InMemoryDatastore, MokaAnnouncementCache,
    NearlySoldOutAnnouncementSource, SmtpMailer,
};
