//! Server error types and their HTTP mapping

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Conference not found: {key}")]
    ConferenceNotFound { key: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Mail delivery failed: {message}")]
    MailDelivery { message: String },

    #[error("Mail delivery is not configured")]
    MailNotConfigured,

    #[error("Announcement cache error: {message}")]
    Cache { message: String },

    #[error("Datastore error: {message}")]
    Datastore { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn mail(message: impl Into<String>) -> Self {
        Self::MailDelivery { message: message.into() }
    }

    pub fn datastore(message: impl Into<String>) -> Self {
        Self::Datastore { message: message.into() }
    }

    /// HTTP status reported to the trigger that invoked the handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ServerError::SharedError(
                SharedError::InvalidKey { .. }
                | SharedError::UnknownKind { .. }
                | SharedError::KindMismatch { .. },
            ) => StatusCode::BAD_REQUEST,
            ServerError::ConferenceNotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::MailDelivery { .. } | ServerError::MailNotConfigured => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormRejection> for ServerError {
    fn from(rejection: FormRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
