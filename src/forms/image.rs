//! Featured image validation
//!
//! Only the reported size is checked; the file itself is stored elsewhere and
//! passed through untouched.

use serde::{Deserialize, Serialize};

/// Descriptor of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    /// Reference under which the upload collaborator stored the file
    pub name: String,
    pub size: u64,
}

impl ImageUpload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// Accept a missing upload or one of at most `max_bytes` bytes
pub fn validate_image(upload: Option<&ImageUpload>, max_bytes: u64) -> Result<(), String> {
    match upload {
        Some(image) if image.size > max_bytes => Err(format!(
            "Image file too large ( > {} MB ).",
            max_bytes / (1024 * 1024)
        )),
        _ => Ok(()),
    }
}
