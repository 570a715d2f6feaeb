//! Registration handler for the event details page

use crate::forms::{FormData, RegistrationForm};
use crate::handlers::{Outcome, Route};
use crate::middleware::Actor;
use crate::state::AppContext;
use crate::utils::errors::{EventEaseError, Result};

/// Register, update the note, or cancel, depending on the submitted payload
pub async fn submit(ctx: &AppContext, slug: &str, actor: Actor, form: &FormData) -> Result<Outcome> {
    let user_id = ctx.auth.require_account(actor, "event_registration")?;
    let event = ctx.services.event_service.get_event(slug).await?;
    let action = RegistrationForm::parse(form).map_err(EventEaseError::Validation)?;

    let outcome = ctx
        .services
        .registration_service
        .apply(&event, user_id, action)
        .await?;

    Ok(Outcome::Registration {
        outcome,
        redirect: Route::EventDetails { slug: event.slug },
    })
}
