//! Form validation
//!
//! Raw request fields come in as a string map; each form turns them into a
//! typed value or a set of per-field error messages. No form touches storage.

pub mod contact;
pub mod event;
pub mod image;
pub mod registration;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::utils::helpers::char_len;

pub use contact::ContactForm;
pub use event::EventForm;
pub use image::{ImageUpload, validate_image};
pub use registration::{RegistrationAction, RegistrationForm};

pub const REQUIRED: &str = "This field is required.";

/// Raw submitted fields
pub type FormData = HashMap<String, String>;

/// Field name to error messages, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Trimmed value of a field, `None` when missing or blank
pub(crate) fn field<'a>(data: &'a FormData, name: &str) -> Option<&'a str> {
    data.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// A required text field with an optional length cap
pub(crate) fn required_text(
    data: &FormData,
    name: &str,
    max_len: Option<usize>,
    errors: &mut FormErrors,
) -> Option<String> {
    let Some(value) = field(data, name) else {
        errors.add(name, REQUIRED);
        return None;
    };
    if let Some(max) = max_len {
        if !check_max_len(name, value, max, errors) {
            return None;
        }
    }
    Some(value.to_string())
}

/// Record a length error when `value` is longer than `max` characters
pub(crate) fn check_max_len(name: &str, value: &str, max: usize, errors: &mut FormErrors) -> bool {
    let len = char_len(value);
    if len > max {
        errors.add(
            name,
            format!("Ensure this value has at most {} characters (it has {}).", max, len),
        );
        return false;
    }
    true
}
