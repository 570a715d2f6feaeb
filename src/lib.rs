//! EventEase
//!
//! Community event board: members publish events (held for moderation), browse
//! upcoming and past events, register with an optional note, and send contact
//! messages. The HTTP and rendering layers sit outside this crate and talk to
//! it through [`handlers::dispatch`].

pub mod config;
pub mod database;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventEaseError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, MemoryStore, Store};
pub use handlers::{dispatch, handle_request, Method, Outcome, Request, Route};
pub use middleware::Actor;
pub use services::ServiceFactory;
pub use state::AppContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
