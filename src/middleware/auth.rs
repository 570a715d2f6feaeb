//! Authentication guard
//!
//! The identity provider resolves who is making a request; this module only
//! decides whether a route may proceed for that actor.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::utils::errors::{EventEaseError, Result};

/// Who is making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Anonymous,
    Account(i64),
}

impl Actor {
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Actor::Anonymous => None,
            Actor::Account(id) => Some(*id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Account(_))
    }
}

/// Authentication middleware
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// The account id, or `AuthenticationRequired` for anonymous actors
    pub fn require_account(&self, actor: Actor, action: &str) -> Result<i64> {
        match actor {
            Actor::Account(user_id) => {
                debug!(user_id = user_id, action = action, "Authentication check passed");
                Ok(user_id)
            }
            Actor::Anonymous => {
                warn!(action = action, "Anonymous access to an authenticated action");
                Err(EventEaseError::AuthenticationRequired)
            }
        }
    }
}
