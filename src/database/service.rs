//! Database service layer
//!
//! This module provides a high-level interface to database operations and the
//! PostgreSQL implementation of [`Store`].

use std::time::Instant;

use async_trait::async_trait;

use crate::database::{
    ContactRepository, DatabasePool, EventRepository, RegistrationRepository, Store, UserRepository,
};
use crate::models::*;
use crate::utils::errors::Result;
use crate::utils::logging::log_database_operation;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    pub contacts: ContactRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool),
        }
    }

    /// Return the existing account for `id`, creating it with a profile on first sight
    pub async fn initialize_user(
        &self,
        id: i64,
        username: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<User> {
        if let Some(existing_user) = self.users.find_by_id(id).await? {
            return Ok(existing_user);
        }

        self.users
            .create(CreateUserRequest {
                id,
                username: Some(username.to_string()),
                first_name,
                last_name,
            })
            .await
    }
}

/// Time a repository call and record it at debug level
async fn timed<T>(
    operation: &str,
    table: &str,
    call: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    let started = Instant::now();
    let result = call.await;
    log_database_operation(operation, table, started.elapsed().as_millis() as u64, result.is_ok());
    result
}

#[async_trait]
impl Store for DatabaseService {
    async fn ensure_account(&self, user_id: i64) -> Result<()> {
        timed("upsert", "users", self.users.ensure(user_id)).await
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        timed("slug_exists", "events", self.events.slug_exists(slug)).await
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        timed("insert", "events", self.events.create(request)).await
    }

    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        timed("select", "events", self.events.find_by_slug(slug)).await
    }

    async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>> {
        timed("list", "events", self.events.list(query)).await
    }

    async fn find_registration(&self, event_id: i64, user_id: i64) -> Result<Option<EventRegistration>> {
        timed("select", "event_registrations", self.registrations.find(event_id, user_id)).await
    }

    async fn create_registration(&self, request: RegisterRequest) -> Result<EventRegistration> {
        timed("insert", "event_registrations", self.registrations.create(request)).await
    }

    async fn update_registration_note(
        &self,
        event_id: i64,
        user_id: i64,
        note: Option<String>,
    ) -> Result<Option<EventRegistration>> {
        timed(
            "update",
            "event_registrations",
            self.registrations.update_note(event_id, user_id, note),
        )
        .await
    }

    async fn delete_registration(&self, event_id: i64, user_id: i64) -> Result<u64> {
        timed("delete", "event_registrations", self.registrations.delete(event_id, user_id)).await
    }

    async fn count_registrations(&self, event_id: i64) -> Result<i64> {
        timed("count", "event_registrations", self.registrations.count_for_event(event_id)).await
    }

    async fn create_contact_message(&self, request: CreateContactMessageRequest) -> Result<ContactMessage> {
        timed("insert", "contact_messages", self.contacts.create(request)).await
    }
}
