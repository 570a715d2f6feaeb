//! Application context
//!
//! Everything a request handler needs, shared across requests. Handlers hold
//! no mutable state of their own; durable state lives in the store.

use std::sync::Arc;

use crate::config::Settings;
use crate::database::{DatabaseService, Store};
use crate::forms::EventForm;
use crate::middleware::{AuthMiddleware, LoggingMiddleware};
use crate::services::ServiceFactory;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub store: Arc<dyn Store>,
    pub services: ServiceFactory,
    pub auth: AuthMiddleware,
    pub logging: LoggingMiddleware,
}

impl AppContext {
    /// Create a new AppContext over any store
    pub fn new(settings: Settings, store: Arc<dyn Store>) -> Self {
        let services = ServiceFactory::new(store.clone(), settings.clone());

        Self {
            settings,
            store,
            services,
            auth: AuthMiddleware::new(),
            logging: LoggingMiddleware::default(),
        }
    }

    /// Context backed by PostgreSQL
    pub fn with_database(settings: Settings, database: DatabaseService) -> Self {
        Self::new(settings, Arc::new(database))
    }

    /// Event form configured with the upload limit
    pub fn event_form(&self) -> EventForm {
        EventForm::new(self.settings.uploads.max_image_bytes)
    }
}
