//! Test context for handler-level tests
//!
//! Wires an [`AppContext`] over a fresh in-memory store so that every test
//! starts from an empty board. The two member accounts are provisioned up
//! front so tests may write rows for them straight into the store.

use eventease::config::Settings;
use eventease::database::{MemoryStore, Store};
use eventease::forms::FormData;
use eventease::handlers::{dispatch, Outcome, Request, Route};
use eventease::middleware::Actor;
use eventease::models::Event;
use eventease::state::AppContext;
use eventease::utils::errors::Result;
use std::sync::{Arc, Once};

use super::test_data::event_form;

static INIT: Once = Once::new();

pub const MEMBER: Actor = Actor::Account(1);
pub const OTHER_MEMBER: Actor = Actor::Account(2);

pub struct TestContext {
    pub app: AppContext,
    pub store: MemoryStore,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn auto_approving() -> Self {
        let mut settings = Settings::default();
        settings.events.auto_approve = true;
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });

        let store = MemoryStore::with_accounts([1, 2]);
        let app = AppContext::new(settings, Arc::new(store.clone()));
        Self { app, store }
    }

    pub async fn get(&self, route: Route, actor: Actor) -> Result<Outcome> {
        dispatch(&self.app, Request::get(route, actor)).await
    }

    pub async fn post(&self, route: Route, actor: Actor, form: FormData) -> Result<Outcome> {
        dispatch(&self.app, Request::post(route, actor, form)).await
    }

    /// Create an event through the creation handler and return it
    pub async fn create_event(&self, title: &str) -> Event {
        match self.post(Route::CreateEvent, MEMBER, event_form(title)).await {
            Ok(Outcome::EventCreated { event, .. }) => event,
            other => panic!("event creation failed: {:?}", other),
        }
    }

    pub async fn registration_count(&self, event: &Event) -> i64 {
        self.store
            .count_registrations(event.id)
            .await
            .expect("count registrations")
    }
}

pub fn details_route(event: &Event) -> Route {
    Route::EventDetails { slug: event.slug.clone() }
}
