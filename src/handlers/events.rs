//! Event handlers: listings, details and creation

use tracing::debug;

use crate::handlers::{Outcome, Page, Request, Route};
use crate::middleware::Actor;
use crate::state::AppContext;
use crate::utils::errors::{EventEaseError, Result};

/// Approved events from today on
pub async fn upcoming(ctx: &AppContext) -> Result<Outcome> {
    let events = ctx.services.event_service.upcoming_events().await?;
    Ok(Outcome::UpcomingEvents(events))
}

/// Approved events before today, most recent first
pub async fn past(ctx: &AppContext) -> Result<Outcome> {
    let events = ctx.services.event_service.past_events().await?;
    Ok(Outcome::PastEvents(events))
}

pub async fn details(ctx: &AppContext, slug: &str, actor: Actor) -> Result<Outcome> {
    debug!(slug = slug, user_id = actor.user_id(), "Loading event details");
    let details = ctx.services.event_service.event_details(slug, actor.user_id()).await?;
    Ok(Outcome::EventDetails(details))
}

/// Empty creation form, accounts only
pub fn create_form(ctx: &AppContext, actor: Actor) -> Result<Outcome> {
    ctx.auth.require_account(actor, "create_event_form")?;
    Ok(Outcome::Page(Page::CreateEventForm))
}

pub async fn create(ctx: &AppContext, request: &Request) -> Result<Outcome> {
    let user_id = ctx.auth.require_account(request.actor, "create_event")?;

    let input = ctx
        .event_form()
        .parse(&request.form, request.image.as_ref())
        .map_err(EventEaseError::Validation)?;

    let event = ctx.services.event_service.create_event(user_id, input).await?;
    Ok(Outcome::EventCreated { event, redirect: Route::Success })
}
