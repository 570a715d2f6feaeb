//! Registration state machine
//!
//! An account is either `Unregistered` or `Registered(note)` for an event.
//! [`plan`] decides, from the stored registration and the requested action,
//! which single write (if any) to perform; [`RegistrationService::apply`]
//! carries it out. The event itself is never modified.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::database::Store;
use crate::forms::RegistrationAction;
use crate::models::{Event, EventRegistration, RegisterRequest};
use crate::utils::errors::{EventEaseError, Result};
use crate::utils::logging::log_registration_change;

/// Current relationship of an account to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    Unregistered,
    Registered { note: Option<String> },
}

impl RegistrationState {
    pub fn of(registration: Option<&EventRegistration>) -> Self {
        match registration {
            None => RegistrationState::Unregistered,
            Some(r) => RegistrationState::Registered { note: r.note.clone() },
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationState::Registered { .. })
    }
}

/// The write a transition requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Create { note: Option<String> },
    OverwriteNote { note: Option<String> },
    Delete,
    /// Update with the stored note
    KeepUnchanged,
    /// Register while already registered
    KeepExisting,
}

/// Result of a transition, with the refreshed registration where one exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    Created(EventRegistration),
    Updated(EventRegistration),
    Unchanged(EventRegistration),
    AlreadyRegistered(EventRegistration),
    Cancelled,
}

impl RegistrationOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationOutcome::Created(_) => "created",
            RegistrationOutcome::Updated(_) => "updated",
            RegistrationOutcome::Unchanged(_) => "unchanged",
            RegistrationOutcome::AlreadyRegistered(_) => "already_registered",
            RegistrationOutcome::Cancelled => "cancelled",
        }
    }

    /// Registration state after the transition
    pub fn state(&self) -> RegistrationState {
        match self {
            RegistrationOutcome::Created(r)
            | RegistrationOutcome::Updated(r)
            | RegistrationOutcome::Unchanged(r)
            | RegistrationOutcome::AlreadyRegistered(r) => RegistrationState::of(Some(r)),
            RegistrationOutcome::Cancelled => RegistrationState::Unregistered,
        }
    }
}

/// Decide the transition. Update and cancel require an existing registration;
/// without one they are a conflict rather than a silent success.
pub fn plan(current: Option<&EventRegistration>, action: &RegistrationAction) -> Result<Step> {
    match (current, action) {
        (None, RegistrationAction::Register { note }) => Ok(Step::Create { note: note.clone() }),
        (Some(_), RegistrationAction::Register { .. }) => Ok(Step::KeepExisting),
        (Some(existing), RegistrationAction::Update { note }) if existing.note == *note => Ok(Step::KeepUnchanged),
        (Some(_), RegistrationAction::Update { note }) => Ok(Step::OverwriteNote { note: note.clone() }),
        (Some(_), RegistrationAction::Cancel) => Ok(Step::Delete),
        (None, action) => Err(EventEaseError::Conflict(format!(
            "Cannot {} a registration that does not exist",
            action.name()
        ))),
    }
}

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn Store>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Current state of `user_id` for `event`
    pub async fn state(&self, event: &Event, user_id: i64) -> Result<RegistrationState> {
        let registration = self.store.find_registration(event.id, user_id).await?;
        Ok(RegistrationState::of(registration.as_ref()))
    }

    /// Apply `action` for `user_id` on `event`, performing at most one registration write
    pub async fn apply(
        &self,
        event: &Event,
        user_id: i64,
        action: RegistrationAction,
    ) -> Result<RegistrationOutcome> {
        let current = self.store.find_registration(event.id, user_id).await?;
        let step = plan(current.as_ref(), &action)?;
        debug!(event_id = event.id, user_id = user_id, step = ?step, "Registration transition planned");

        let outcome = match (step, current) {
            (Step::Create { note }, _) => {
                self.store.ensure_account(user_id).await?;
                let registration = self
                    .store
                    .create_registration(RegisterRequest { event_id: event.id, user_id, note })
                    .await?;
                RegistrationOutcome::Created(registration)
            }
            (Step::OverwriteNote { note }, _) => {
                let registration = self
                    .store
                    .update_registration_note(event.id, user_id, note)
                    .await?
                    .ok_or_else(|| registration_vanished(event, user_id))?;
                RegistrationOutcome::Updated(registration)
            }
            (Step::Delete, _) => {
                if self.store.delete_registration(event.id, user_id).await? == 0 {
                    return Err(registration_vanished(event, user_id));
                }
                RegistrationOutcome::Cancelled
            }
            (Step::KeepUnchanged, Some(existing)) => RegistrationOutcome::Unchanged(existing),
            (Step::KeepExisting, Some(existing)) => RegistrationOutcome::AlreadyRegistered(existing),
            (Step::KeepUnchanged | Step::KeepExisting, None) => {
                return Err(registration_vanished(event, user_id));
            }
        };

        let wrote = matches!(
            outcome,
            RegistrationOutcome::Created(_) | RegistrationOutcome::Updated(_) | RegistrationOutcome::Cancelled
        );
        log_registration_change(event.id, user_id, outcome.kind(), wrote);

        Ok(outcome)
    }
}

/// The registration was removed between the lookup and the write
fn registration_vanished(event: &Event, user_id: i64) -> EventEaseError {
    EventEaseError::Conflict(format!(
        "Registration of user {} for event {} was removed concurrently",
        user_id, event.slug
    ))
}
