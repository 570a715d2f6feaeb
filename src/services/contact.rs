//! Contact message service

use std::sync::Arc;

use crate::database::Store;
use crate::models::{ContactMessage, CreateContactMessageRequest};
use crate::utils::errors::Result;
use crate::utils::logging::log_contact_message;

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn Store>,
}

impl ContactService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Append a validated contact message
    pub async fn submit(&self, request: CreateContactMessageRequest) -> Result<ContactMessage> {
        let message = self.store.create_contact_message(request).await?;
        log_contact_message(message.id, &message.email);
        Ok(message)
    }
}
