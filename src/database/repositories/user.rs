//! User repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::user::{User, CreateUserRequest};
use crate::utils::errors::EventEaseError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, EventEaseError> {
        let conflict = format!("User already exists: {}", request.id);
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, first_name, last_name, created_at
            "#
        )
        .bind(request.id)
        .bind(request.username)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventEaseError::from_database(e, conflict))?;

        Ok(user)
    }

    /// Insert a bare row for `id` unless one exists
    pub async fn ensure(&self, id: i64) -> Result<(), EventEaseError> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, EventEaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, first_name, last_name, created_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete user; their events and registrations cascade
    pub async fn delete(&self, id: i64) -> Result<(), EventEaseError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
