//! Message types for the conference backend
//!
//! This module organizes wire payloads by category:
//! - `tasks`: form bodies posted by the task queue
//! - `outbound`: response bodies returned to API clients
//! - `config`: server configuration

pub mod tasks;
pub mod outbound;
pub mod config;

pub use tasks::{CheckSpeakersTask, ConfirmationEmailTask};

pub use outbound::StringMessage;

pub use config::{ServerConfig, SmtpConfig, CacheConfig};
