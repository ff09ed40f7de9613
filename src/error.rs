//! Error types for the Nieuwe Vloer backend.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Schema validation errors live in [`crate::domain::ValidationError`]; the types here
//! cover the persistence and configuration boundaries plus the combined write-path error.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when writing to or probing the document store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// No connection string was configured, so no store client exists
    #[error("document store is not configured")]
    NotConfigured,

    /// The store could not be reached (no reachable server, timeout)
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store acknowledged the request but rejected the write
    #[error("write rejected: {0}")]
    WriteRejected(String),

    /// The record could not be converted to a storable document
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Generic store error with context
    #[error("store error: {0}")]
    Other(String),
}

impl From<mongodb::error::Error> for PersistenceError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match *err.kind {
            ErrorKind::ServerSelection { ref message, .. } => {
                PersistenceError::Unavailable(message.clone())
            }
            ErrorKind::Io(_) => PersistenceError::Unavailable(err.to_string()),
            ErrorKind::Write(_) => PersistenceError::WriteRejected(err.to_string()),
            _ => PersistenceError::Other(err.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Error returned by the contact submission path.
///
/// Keeps the client-fault / server-fault distinction so HTTP handlers can map
/// each arm to the right status code mechanically.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The inbound payload failed schema validation (client fault)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store write failed (server fault)
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;
