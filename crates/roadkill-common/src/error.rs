//! Error types for Roadkill

use std::fmt::Display;

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum RoadkillError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// Uniform wrapper for all database driver and connectivity failures.
    ///
    /// `target` is a redacted description of the database (credentials
    /// stripped), never the raw connection string.
    #[error("{op} failed against {target}: {message}")]
    Database {
        op: String,
        target: String,
        message: String,
    },

    #[error("settings error: {0}")]
    Settings(String),

    #[error("install error: {0}")]
    Install(String),

    #[error("install has already been run")]
    AlreadyInstalled,
}

impl RoadkillError {
    /// Build a `Database` error for a failed repository operation.
    pub fn database(
        op: impl Into<String>,
        target: impl Into<String>,
        message: impl Display,
    ) -> Self {
        RoadkillError::Database {
            op: op.into(),
            target: target.into(),
            message: message.to_string(),
        }
    }
}
