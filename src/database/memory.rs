//! In-memory [`Store`] implementation
//!
//! Keeps every table in a single `RwLock`ed state so that constraint checks and
//! writes happen atomically, mirroring the unique and foreign-key constraints
//! of the schema.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::Store;
use crate::models::*;
use crate::utils::errors::{EventEaseError, Result};

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    accounts: HashSet<i64>,
    events: Vec<Event>,
    registrations: HashMap<(i64, i64), EventRegistration>,
    contact_messages: Vec<ContactMessage>,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn require_account(&self, user_id: i64) -> Result<()> {
        if self.accounts.contains(&user_id) {
            Ok(())
        } else {
            Err(EventEaseError::NotFound(format!("account {}", user_id)))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the given account ids already provisioned
    pub fn with_accounts(ids: impl IntoIterator<Item = i64>) -> Self {
        let state = MemoryState { accounts: ids.into_iter().collect(), ..MemoryState::default() };
        Self { state: Arc::new(RwLock::new(state)) }
    }

    pub async fn has_account(&self, user_id: i64) -> bool {
        self.state.read().await.accounts.contains(&user_id)
    }

    /// Stored contact messages in insertion order
    pub async fn contact_messages(&self) -> Vec<ContactMessage> {
        self.state.read().await.contact_messages.clone()
    }

    /// Total number of registrations across all events
    pub async fn registration_total(&self) -> usize {
        self.state.read().await.registrations.len()
    }

    /// Total number of events regardless of status
    pub async fn event_total(&self) -> usize {
        self.state.read().await.events.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ensure_account(&self, user_id: i64) -> Result<()> {
        self.state.write().await.accounts.insert(user_id);
        Ok(())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        Ok(self.state.read().await.events.iter().any(|e| e.slug == slug))
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let mut state = self.state.write().await;
        state.require_account(request.created_by)?;
        if state.events.iter().any(|e| e.slug == request.slug) {
            return Err(EventEaseError::Conflict(format!("Slug already taken: {}", request.slug)));
        }

        let event = Event {
            id: state.next_id(),
            title: request.title,
            slug: request.slug,
            description: request.description,
            date: request.date,
            time: request.time,
            location: request.location,
            created_by: request.created_by,
            created_at: Utc::now(),
            status: request.status,
            featured_image: request.featured_image,
        };
        state.events.push(event.clone());
        Ok(event)
    }

    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let state = self.state.read().await;
        Ok(state.events.iter().find(|e| e.slug == slug).cloned())
    }

    async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>> {
        let state = self.state.read().await;
        let mut events: Vec<Event> = state.events.iter().filter(|e| query.matches(e)).cloned().collect();
        match query.window {
            EventWindow::Upcoming(_) => events.sort_by_key(Event::schedule),
            EventWindow::Past(_) => events.sort_by_key(|e| std::cmp::Reverse(e.schedule())),
        }
        Ok(events)
    }

    async fn find_registration(&self, event_id: i64, user_id: i64) -> Result<Option<EventRegistration>> {
        Ok(self.state.read().await.registrations.get(&(event_id, user_id)).cloned())
    }

    async fn create_registration(&self, request: RegisterRequest) -> Result<EventRegistration> {
        let mut state = self.state.write().await;
        let key = (request.event_id, request.user_id);
        if state.registrations.contains_key(&key) {
            return Err(EventEaseError::Conflict(format!(
                "User {} is already registered for event {}",
                request.user_id, request.event_id
            )));
        }
        if !state.events.iter().any(|e| e.id == request.event_id) {
            return Err(EventEaseError::NotFound(format!("event {}", request.event_id)));
        }
        state.require_account(request.user_id)?;

        let registration = EventRegistration {
            id: state.next_id(),
            user_id: request.user_id,
            event_id: request.event_id,
            note: request.note,
            registered_at: Utc::now(),
        };
        state.registrations.insert(key, registration.clone());
        Ok(registration)
    }

    async fn update_registration_note(
        &self,
        event_id: i64,
        user_id: i64,
        note: Option<String>,
    ) -> Result<Option<EventRegistration>> {
        let mut state = self.state.write().await;
        Ok(state.registrations.get_mut(&(event_id, user_id)).map(|registration| {
            registration.note = note;
            registration.clone()
        }))
    }

    async fn delete_registration(&self, event_id: i64, user_id: i64) -> Result<u64> {
        let mut state = self.state.write().await;
        Ok(state.registrations.remove(&(event_id, user_id)).map_or(0, |_| 1))
    }

    async fn count_registrations(&self, event_id: i64) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state.registrations.keys().filter(|(e, _)| *e == event_id).count() as i64)
    }

    async fn create_contact_message(&self, request: CreateContactMessageRequest) -> Result<ContactMessage> {
        let mut state = self.state.write().await;
        let message = ContactMessage {
            id: state.next_id(),
            name: request.name,
            email: request.email,
            message: request.message,
            created_on: Utc::now(),
        };
        state.contact_messages.push(message.clone());
        Ok(message)
    }
}
