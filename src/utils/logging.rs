//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventEase application.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventEaseError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the application logs.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "eventease.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let (stdout_layer, file_layer) = if config.format == "json" {
        (
            tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed(),
            tracing_subscriber::fmt::layer().json().with_writer(non_blocking).boxed(),
        )
    } else {
        (
            tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed(),
            tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking).boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EventEaseError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event management actions
pub fn log_event_action(event_id: i64, slug: &str, action: &str, user_id: i64) {
    info!(
        event_id = event_id,
        slug = slug,
        action = action,
        user_id = user_id,
        "Event action performed"
    );
}

/// Log a registration state change
pub fn log_registration_change(event_id: i64, user_id: i64, transition: &str, wrote: bool) {
    if wrote {
        info!(
            event_id = event_id,
            user_id = user_id,
            transition = transition,
            "Registration changed"
        );
    } else {
        debug!(
            event_id = event_id,
            user_id = user_id,
            transition = transition,
            "Registration left unchanged"
        );
    }
}

/// Log a stored contact message
pub fn log_contact_message(message_id: i64, email: &str) {
    info!(message_id = message_id, email = email, "Contact message received");
}

/// Log a rejected request
pub fn log_rejection(route: &str, reason: &str) {
    warn!(route = route, reason = reason, "Request rejected");
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
