//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Moderation status controlling public visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum EventStatus {
    Pending = 0,
    Approved = 1,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub status: EventStatus,
    pub featured_image: Option<String>,
}

impl Event {
    /// Sort key used by the listings
    pub fn schedule(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}

/// Validated event fields, as submitted by the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub featured_image: Option<String>,
}

/// Fully prepared row handed to the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub created_by: i64,
    pub status: EventStatus,
    pub featured_image: Option<String>,
}

/// Which side of "today" a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventWindow {
    /// `date >= today`, earliest first
    Upcoming(NaiveDate),
    /// `date < today`, most recent first
    Past(NaiveDate),
}

impl EventWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            EventWindow::Upcoming(today) => date >= *today,
            EventWindow::Past(today) => date < *today,
        }
    }
}

/// Listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventQuery {
    pub status: EventStatus,
    pub window: EventWindow,
}

impl EventQuery {
    pub fn upcoming(today: NaiveDate) -> Self {
        Self { status: EventStatus::Approved, window: EventWindow::Upcoming(today) }
    }

    pub fn past(today: NaiveDate) -> Self {
        Self { status: EventStatus::Approved, window: EventWindow::Past(today) }
    }

    pub fn matches(&self, event: &Event) -> bool {
        event.status == self.status && self.window.contains(event.date)
    }
}
