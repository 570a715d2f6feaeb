//! State management module
//!
//! This module holds the shared application context handed to every request

pub mod context;

pub use context::AppContext;
