//! Shared logging utilities for consistent tracing across handlers

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the default filter directive for the given base level
pub fn default_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("conference_server={base_level},shared={base_level},tower_http={base_level},axum={base_level}")
}

/// Initialize tracing subscriber with an optional log level.
///
/// `RUST_LOG` takes precedence over the level passed on the command line.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for task-aware info logging
#[macro_export]
macro_rules! task_info {
    ($task:expr, $($arg:tt)*) => {
        tracing::info!(
            task = %$task,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for task-aware warning logging
#[macro_export]
macro_rules! task_warn {
    ($task:expr, $($arg:tt)*) => {
        tracing::warn!(
            task = %$task,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for task-aware error logging
#[macro_export]
macro_rules! task_error {
    ($task:expr, $($arg:tt)*) => {
        tracing::error!(
            task = %$task,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for task-aware debug logging
#[macro_export]
macro_rules! task_debug {
    ($task:expr, $($arg:tt)*) => {
        tracing::debug!(
            task = %$task,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
