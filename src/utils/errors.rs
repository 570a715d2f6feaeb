//! Error handling for EventEase
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::forms::FormErrors;

/// Main error type for EventEase application
#[derive(Error, Debug)]
pub enum EventEaseError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    #[error("Event not found: {slug}")]
    EventNotFound { slug: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for EventEase operations
pub type Result<T> = std::result::Result<T, EventEaseError>;

impl EventEaseError {
    /// Map a database error, turning unique-constraint violations into conflicts
    /// and foreign-key violations into missing references
    pub fn from_database(error: sqlx::Error, conflict: impl Into<String>) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                EventEaseError::Conflict(conflict.into())
            }
            sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
                EventEaseError::NotFound(format!(
                    "referenced row missing ({})",
                    db_error.constraint().unwrap_or("foreign key")
                ))
            }
            _ => EventEaseError::Database(error),
        }
    }

    /// Check if the error is recoverable by the caller re-issuing a corrected request
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventEaseError::Database(_) => false,
            EventEaseError::Migration(_) => false,
            EventEaseError::Config(_) => false,
            EventEaseError::ConfigLoad(_) => false,
            EventEaseError::Validation(_) => true,
            EventEaseError::EventNotFound { .. } => true,
            EventEaseError::NotFound(_) => true,
            EventEaseError::Conflict(_) => true,
            EventEaseError::AuthenticationRequired => true,
            EventEaseError::Serialization(_) => false,
            EventEaseError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventEaseError::Database(_) => ErrorSeverity::Critical,
            EventEaseError::Migration(_) => ErrorSeverity::Critical,
            EventEaseError::Config(_) => ErrorSeverity::Critical,
            EventEaseError::ConfigLoad(_) => ErrorSeverity::Critical,
            EventEaseError::Conflict(_) => ErrorSeverity::Warning,
            EventEaseError::AuthenticationRequired => ErrorSeverity::Warning,
            EventEaseError::Validation(_) => ErrorSeverity::Info,
            EventEaseError::EventNotFound { .. } => ErrorSeverity::Info,
            EventEaseError::NotFound(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
