//! Test helpers module
//!
//! Context setup over the in-memory store, a PostgreSQL helper backed by
//! testcontainers, and builders for form payloads and stored rows.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_context;

pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
