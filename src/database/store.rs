//! Storage abstraction consumed by the services
//!
//! Both implementations enforce the same constraints: slugs are unique across
//! events and an account holds at most one registration per event. Violations
//! surface as [`EventEaseError::Conflict`](crate::utils::errors::EventEaseError::Conflict).
//! Events and registrations may only reference accounts the store knows about;
//! writes naming an unknown account fail with
//! [`EventEaseError::NotFound`](crate::utils::errors::EventEaseError::NotFound).

use async_trait::async_trait;

use crate::models::{
    ContactMessage, CreateContactMessageRequest, CreateEventRequest, Event, EventQuery,
    EventRegistration, RegisterRequest,
};
use crate::utils::errors::Result;

#[async_trait]
pub trait Store: Send + Sync {
    /// Make sure the account id exists locally; a no-op when it already does
    async fn ensure_account(&self, user_id: i64) -> Result<()>;

    /// Whether any event already uses `slug`
    async fn slug_exists(&self, slug: &str) -> Result<bool>;

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event>;

    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>>;

    /// Events matching `query`, ordered by (date, time): ascending for upcoming,
    /// descending for past
    async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>>;

    async fn find_registration(&self, event_id: i64, user_id: i64) -> Result<Option<EventRegistration>>;

    async fn create_registration(&self, request: RegisterRequest) -> Result<EventRegistration>;

    /// Overwrite the note; `None` when no registration exists
    async fn update_registration_note(
        &self,
        event_id: i64,
        user_id: i64,
        note: Option<String>,
    ) -> Result<Option<EventRegistration>>;

    /// Delete the registration, returning the number of removed rows
    async fn delete_registration(&self, event_id: i64, user_id: i64) -> Result<u64>;

    async fn count_registrations(&self, event_id: i64) -> Result<i64>;

    async fn create_contact_message(&self, request: CreateContactMessageRequest) -> Result<ContactMessage>;
}
