//! Contact form

use super::{field, required_text, FormData, FormErrors, REQUIRED};
use crate::models::CreateContactMessageRequest;
use crate::utils::helpers::is_valid_email;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 254;

pub struct ContactForm;

impl ContactForm {
    pub fn parse(data: &FormData) -> Result<CreateContactMessageRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required_text(data, "name", Some(NAME_MAX_LEN), &mut errors);
        let email = match field(data, "email") {
            None => {
                errors.add("email", REQUIRED);
                None
            }
            Some(email) if email.len() > EMAIL_MAX_LEN || !is_valid_email(email) => {
                errors.add("email", "Enter a valid email address.");
                None
            }
            Some(email) => Some(email.to_string()),
        };
        let message = required_text(data, "message", None, &mut errors);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(CreateContactMessageRequest { name, email, message }),
            _ => Err(errors),
        }
    }
}
