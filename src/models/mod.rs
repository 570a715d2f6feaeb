//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod registration;
pub mod contact;

// Re-export commonly used models
pub use user::{User, CreateUserRequest};
pub use event::{Event, EventStatus, EventInput, CreateEventRequest, EventQuery, EventWindow};
pub use registration::{EventRegistration, RegisterRequest};
pub use contact::{ContactMessage, CreateContactMessageRequest};
