//! Shared error types for the conference backend

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid websafe key: {input}")]
    InvalidKey { input: String },

    #[error("Unknown entity kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Key kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
