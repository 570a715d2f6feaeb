//! Event registration repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::registration::{EventRegistration, RegisterRequest};
use crate::utils::errors::EventEaseError;

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a user for an event. The `(user_id, event_id)` constraint turns
    /// a duplicate into a conflict.
    pub async fn create(&self, request: RegisterRequest) -> Result<EventRegistration, EventEaseError> {
        let (event_id, user_id) = (request.event_id, request.user_id);
        let registration = sqlx::query_as::<_, EventRegistration>(
            r#"
            INSERT INTO event_registrations (user_id, event_id, note, registered_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, event_id, note, registered_at
            "#
        )
        .bind(request.user_id)
        .bind(request.event_id)
        .bind(request.note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            EventEaseError::from_database(
                e,
                format!("User {} is already registered for event {}", user_id, event_id),
            )
        })?;

        Ok(registration)
    }

    /// Find the registration of a user for an event
    pub async fn find(&self, event_id: i64, user_id: i64) -> Result<Option<EventRegistration>, EventEaseError> {
        let registration = sqlx::query_as::<_, EventRegistration>(
            "SELECT id, user_id, event_id, note, registered_at FROM event_registrations WHERE event_id = $1 AND user_id = $2"
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Overwrite the note of an existing registration
    pub async fn update_note(
        &self,
        event_id: i64,
        user_id: i64,
        note: Option<String>,
    ) -> Result<Option<EventRegistration>, EventEaseError> {
        let registration = sqlx::query_as::<_, EventRegistration>(
            r#"
            UPDATE event_registrations
            SET note = $3
            WHERE event_id = $1 AND user_id = $2
            RETURNING id, user_id, event_id, note, registered_at
            "#
        )
        .bind(event_id)
        .bind(user_id)
        .bind(note)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Delete a registration
    pub async fn delete(&self, event_id: i64, user_id: i64) -> Result<u64, EventEaseError> {
        let result = sqlx::query("DELETE FROM event_registrations WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Get event registrations, newest first
    pub async fn get_for_event(&self, event_id: i64) -> Result<Vec<EventRegistration>, EventEaseError> {
        let registrations = sqlx::query_as::<_, EventRegistration>(
            "SELECT id, user_id, event_id, note, registered_at FROM event_registrations WHERE event_id = $1 ORDER BY registered_at DESC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Get registration count for event
    pub async fn count_for_event(&self, event_id: i64) -> Result<i64, EventEaseError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM event_registrations WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
