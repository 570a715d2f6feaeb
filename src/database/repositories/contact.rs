//! Contact message repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::contact::{ContactMessage, CreateContactMessageRequest};
use crate::utils::errors::EventEaseError;

#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a contact message. Messages are never updated or deleted.
    pub async fn create(&self, request: CreateContactMessageRequest) -> Result<ContactMessage, EventEaseError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, message, created_on)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, message, created_on
            "#
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// List messages, newest first
    pub async fn list(&self, limit: i64) -> Result<Vec<ContactMessage>, EventEaseError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, message, created_on FROM contact_messages ORDER BY created_on DESC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
