//! Static pages and empty forms

use serde::{Deserialize, Serialize};

/// Pages that carry no data of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    About,
    Login,
    Success,
    ContactForm,
    CreateEventForm,
}
