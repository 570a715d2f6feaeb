//! Event repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::event::{Event, CreateEventRequest, EventQuery, EventWindow};
use crate::utils::errors::EventEaseError;

const EVENT_COLUMNS: &str =
    "id, title, slug, description, date, time, location, created_by, created_at, status, featured_image";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. A slug taken concurrently is reported as a conflict.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, EventEaseError> {
        let slug = request.slug.clone();
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (title, slug, description, date, time, location, created_by, created_at, status, featured_image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(request.title)
        .bind(request.slug)
        .bind(request.description)
        .bind(request.date)
        .bind(request.time)
        .bind(request.location)
        .bind(request.created_by)
        .bind(Utc::now())
        .bind(request.status)
        .bind(request.featured_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventEaseError::from_database(e, format!("Slug already taken: {}", slug)))?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventEaseError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventEaseError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Check whether a slug is in use
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, EventEaseError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM events WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists.0)
    }

    /// List events matching a status and date window
    pub async fn list(&self, query: EventQuery) -> Result<Vec<Event>, EventEaseError> {
        let (today, filter, order) = match query.window {
            EventWindow::Upcoming(today) => (today, "date >= $2", "date ASC, time ASC"),
            EventWindow::Past(today) => (today, "date < $2", "date DESC, time DESC"),
        };

        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE status = $1 AND {filter} ORDER BY {order}"
        ))
        .bind(query.status)
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Get events created by user, newest first
    pub async fn get_user_events(&self, user_id: i64) -> Result<Vec<Event>, EventEaseError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, EventEaseError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
