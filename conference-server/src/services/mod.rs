//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod announcement_source;
pub mod cache;
pub mod cache_writer;
pub mod datastore;
pub mod mailer;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use announcement_source::NearlySoldOutAnnouncementSource;
pub use cache::MokaAnnouncementCache;
pub use cache_writer::{AnnouncementCacheWriter, featured_key};
pub use datastore::{InMemoryDatastore, Snapshot};
pub use mailer::SmtpMailer;
