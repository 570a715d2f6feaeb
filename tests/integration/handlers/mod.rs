//! Handler integration tests, grouped by route

pub mod contact_test;
pub mod events_test;
pub mod registration_test;
