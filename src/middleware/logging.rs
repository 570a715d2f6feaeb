//! Logging middleware
//!
//! This module provides logging for request handling: what came in, who sent
//! it, how it ended and how long it took.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::handlers::{Outcome, Request};
use crate::utils::errors::EventEaseError;

/// Logging middleware for request handling
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_requests: bool,
    log_performance: bool,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_requests: bool, log_performance: bool) -> Self {
        Self {
            log_requests,
            log_performance,
        }
    }

    /// Log an incoming request. Field values are left out; only names are recorded.
    pub fn log_request(&self, request_id: &str, request: &Request) {
        if !self.log_requests {
            return;
        }

        let mut fields: Vec<&str> = request.form.keys().map(String::as_str).collect();
        fields.sort_unstable();
        let payload = json!({
            "fields": fields,
            "image_bytes": request.image.as_ref().map(|i| i.size),
        });

        info!(
            request_id = request_id,
            method = request.method.as_str(),
            route = %request.route.path(),
            user_id = request.actor.user_id(),
            payload = %payload,
            "Request received"
        );
    }

    /// Log how a request ended
    pub fn log_outcome(
        &self,
        request_id: &str,
        request: &Request,
        result: &Result<Outcome, EventEaseError>,
        elapsed: Duration,
    ) {
        let route = request.route.name();
        match result {
            Ok(outcome) => {
                if self.log_requests {
                    info!(request_id = request_id, route = route, outcome = outcome.kind(), "Request handled");
                }
            }
            Err(e) if e.is_recoverable() => {
                warn!(request_id = request_id, route = route, error = %e, severity = %e.severity(), "Request failed");
            }
            Err(e) => {
                error!(request_id = request_id, route = route, error = %e, severity = %e.severity(), "Request failed");
            }
        }

        if self.log_performance {
            debug!(
                request_id = request_id,
                route = route,
                duration_ms = elapsed.as_millis() as u64,
                "Request timing"
            );
        }
    }
}
