//! Registration form
//!
//! The shape of the payload selects the transition: a `cancel_registration`
//! field cancels, an `update_registration` field updates the note, anything
//! else registers.

use serde::{Deserialize, Serialize};

use super::{check_max_len, FormData, FormErrors};
use crate::utils::helpers::normalize_optional_text;

pub const NOTE_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationAction {
    Register { note: Option<String> },
    Update { note: Option<String> },
    Cancel,
}

impl RegistrationAction {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationAction::Register { .. } => "register",
            RegistrationAction::Update { .. } => "update",
            RegistrationAction::Cancel => "cancel",
        }
    }
}

pub struct RegistrationForm;

impl RegistrationForm {
    pub fn parse(data: &FormData) -> Result<RegistrationAction, FormErrors> {
        if data.contains_key("cancel_registration") {
            return Ok(RegistrationAction::Cancel);
        }

        let mut errors = FormErrors::default();
        let note = normalize_optional_text(data.get("note").map(String::as_str));
        if let Some(note) = &note {
            check_max_len("note", note, NOTE_MAX_LEN, &mut errors);
        }

        let update = data.contains_key("update_registration");
        errors.into_result(|| {
            if update {
                RegistrationAction::Update { note }
            } else {
                RegistrationAction::Register { note }
            }
        })
    }
}
