//! Integration test modules

pub mod handlers;
