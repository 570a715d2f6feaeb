//! Event service
//!
//! Listing, detail lookup and creation of events.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Settings;
use crate::database::Store;
use crate::models::{CreateEventRequest, Event, EventInput, EventQuery, EventRegistration, EventStatus};
use crate::services::slug::assign_unique_slug;
use crate::utils::errors::{EventEaseError, Result};
use crate::utils::logging::log_event_action;

/// Everything the detail page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    /// The acting account's registration, when signed in and registered
    pub registration: Option<EventRegistration>,
    pub registration_count: i64,
}

#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn Store>,
    default_status: EventStatus,
}

impl EventService {
    pub fn new(store: Arc<dyn Store>, settings: &Settings) -> Self {
        let default_status = if settings.events.auto_approve {
            EventStatus::Approved
        } else {
            EventStatus::Pending
        };

        Self { store, default_status }
    }

    /// Approved events on or after today, earliest first
    pub async fn upcoming_events(&self) -> Result<Vec<Event>> {
        self.upcoming_events_on(Utc::now().date_naive()).await
    }

    pub async fn upcoming_events_on(&self, today: NaiveDate) -> Result<Vec<Event>> {
        let events = self.store.list_events(EventQuery::upcoming(today)).await?;
        debug!(count = events.len(), %today, "Listed upcoming events");
        Ok(events)
    }

    /// Approved events before today, most recent first
    pub async fn past_events(&self) -> Result<Vec<Event>> {
        self.past_events_on(Utc::now().date_naive()).await
    }

    pub async fn past_events_on(&self, today: NaiveDate) -> Result<Vec<Event>> {
        let events = self.store.list_events(EventQuery::past(today)).await?;
        debug!(count = events.len(), %today, "Listed past events");
        Ok(events)
    }

    pub async fn get_event(&self, slug: &str) -> Result<Event> {
        self.store
            .find_event_by_slug(slug)
            .await?
            .ok_or_else(|| EventEaseError::EventNotFound { slug: slug.to_string() })
    }

    /// Event plus the registration of `user_id` (if any) and the registration count
    pub async fn event_details(&self, slug: &str, user_id: Option<i64>) -> Result<EventDetails> {
        let event = self.get_event(slug).await?;
        let registration = match user_id {
            Some(user_id) => self.store.find_registration(event.id, user_id).await?,
            None => None,
        };
        let registration_count = self.store.count_registrations(event.id).await?;

        Ok(EventDetails { event, registration, registration_count })
    }

    /// Store a new event created by `creator`, assigning its slug
    pub async fn create_event(&self, creator: i64, input: EventInput) -> Result<Event> {
        let slug = assign_unique_slug(self.store.as_ref(), &input.title).await?;
        self.insert(creator, input, slug).await
    }

    /// Store a new event under a caller-chosen slug; no collision retry
    pub async fn create_event_with_slug(&self, creator: i64, input: EventInput, slug: String) -> Result<Event> {
        self.insert(creator, input, slug).await
    }

    async fn insert(&self, creator: i64, input: EventInput, slug: String) -> Result<Event> {
        self.store.ensure_account(creator).await?;
        let event = self
            .store
            .create_event(CreateEventRequest {
                title: input.title,
                slug,
                description: input.description,
                date: input.date,
                time: input.time,
                location: input.location,
                created_by: creator,
                status: self.default_status,
                featured_image: input.featured_image,
            })
            .await?;

        log_event_action(event.id, &event.slug, "created", creator);
        info!(event_id = event.id, status = %event.status, "Event stored");
        Ok(event)
    }
}
