//! Contact form handler

use crate::forms::{ContactForm, FormData};
use crate::handlers::{Outcome, Route};
use crate::state::AppContext;
use crate::utils::errors::{EventEaseError, Result};

pub async fn submit(ctx: &AppContext, form: &FormData) -> Result<Outcome> {
    let request = ContactForm::parse(form).map_err(EventEaseError::Validation)?;
    let message = ctx.services.contact_service.submit(request).await?;
    Ok(Outcome::ContactSent { message, redirect: Route::Success })
}
