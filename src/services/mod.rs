//! Services module
//!
//! This module contains business logic services

pub mod contact;
pub mod event;
pub mod registration;
pub mod slug;

// Re-export commonly used services
pub use contact::ContactService;
pub use event::{EventDetails, EventService};
pub use registration::{RegistrationOutcome, RegistrationService, RegistrationState};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::database::Store;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub registration_service: RegistrationService,
    pub contact_service: ContactService,
    pub settings: Settings,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one store
    pub fn new(store: Arc<dyn Store>, settings: Settings) -> Self {
        Self {
            event_service: EventService::new(store.clone(), &settings),
            registration_service: RegistrationService::new(store.clone()),
            contact_service: ContactService::new(store),
            settings,
        }
    }
}
