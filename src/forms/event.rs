//! Event creation form

use chrono::{NaiveDate, NaiveTime};

use super::{field, required_text, validate_image, FormData, FormErrors, ImageUpload, REQUIRED};
use crate::models::EventInput;

pub const TITLE_MAX_LEN: usize = 200;
pub const LOCATION_MAX_LEN: usize = 255;

/// Validates `title`, `description`, `date`, `time`, `location` and the optional
/// featured image
#[derive(Debug, Clone, Copy)]
pub struct EventForm {
    max_image_bytes: u64,
}

impl EventForm {
    pub fn new(max_image_bytes: u64) -> Self {
        Self { max_image_bytes }
    }

    pub fn parse(&self, data: &FormData, image: Option<&ImageUpload>) -> Result<EventInput, FormErrors> {
        let mut errors = FormErrors::default();

        let title = required_text(data, "title", Some(TITLE_MAX_LEN), &mut errors);
        let description = required_text(data, "description", None, &mut errors);
        let date = parse_date(data, &mut errors);
        let time = parse_time(data, &mut errors);
        let location = required_text(data, "location", Some(LOCATION_MAX_LEN), &mut errors);

        if let Err(message) = validate_image(image, self.max_image_bytes) {
            errors.add("featured_image", message);
        }

        match (title, description, date, time, location) {
            (Some(title), Some(description), Some(date), Some(time), Some(location)) if errors.is_empty() => {
                Ok(EventInput {
                    title,
                    description,
                    date,
                    time,
                    location,
                    featured_image: image.map(|i| i.name.clone()),
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_date(data: &FormData, errors: &mut FormErrors) -> Option<NaiveDate> {
    let Some(raw) = field(data, "date") else {
        errors.add("date", REQUIRED);
        return None;
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add("date", "Enter a valid date.");
            None
        }
    }
}

fn parse_time(data: &FormData, errors: &mut FormErrors) -> Option<NaiveTime> {
    let Some(raw) = field(data, "time") else {
        errors.add("time", REQUIRED);
        return None;
    };
    match NaiveTime::parse_from_str(raw, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M")) {
        Ok(time) => Some(time),
        Err(_) => {
            errors.add("time", "Enter a valid time.");
            None
        }
    }
}
