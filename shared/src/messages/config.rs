//! Configuration types
//!
//! Built by the server binary from command line flags and environment
//! variables, then validated once at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{SharedError, SharedResult};

/// Default application identity used in the sender address
pub const DEFAULT_APP_ID: &str = "conference-central";

/// Default domain appended to the application id for outbound mail
pub const DEFAULT_MAIL_DOMAIN: &str = "appspotmail.com";

/// Conference server configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub bind_port: u16,
    pub app_id: String,
    pub mail_domain: String,
    pub seed_file: Option<PathBuf>,
    pub smtp: Option<SmtpConfig>,
    pub cache: CacheConfig,
}

/// SMTP relay settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Announcement cache settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CacheConfig {
    pub max_capacity: u64,
    /// Entries never expire when unset
    pub ttl_seconds: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl_seconds: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 8080,
            app_id: DEFAULT_APP_ID.to_string(),
            mail_domain: DEFAULT_MAIL_DOMAIN.to_string(),
            seed_file: None,
            smtp: None,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.app_id.trim().is_empty() {
            return Err(invalid("app_id", &self.app_id));
        }
        if self.mail_domain.trim().is_empty() {
            return Err(invalid("mail_domain", &self.mail_domain));
        }
        if self.cache.max_capacity == 0 {
            return Err(invalid("cache.max_capacity", "0"));
        }
        if let Some(smtp) = &self.smtp {
            if smtp.host.trim().is_empty() {
                return Err(invalid("smtp.host", &smtp.host));
            }
            if smtp.username.is_empty() || smtp.password.is_empty() {
                return Err(invalid("smtp.credentials", "<missing>"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> SharedError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
}
