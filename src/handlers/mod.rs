//! Request handlers module
//!
//! The HTTP layer hands over an already-parsed [`Request`]; [`dispatch`] maps
//! `(method, route)` to one handler function through an explicit table and
//! returns an [`Outcome`] for the rendering layer. Recoverable failures
//! (validation, missing login, unknown slug, conflicts) become outcomes;
//! anything else is returned as an error.

pub mod contact;
pub mod events;
pub mod pages;
pub mod registration;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::forms::{FormData, FormErrors, ImageUpload};
use crate::middleware::Actor;
use crate::models::{ContactMessage, Event};
use crate::services::{EventDetails, RegistrationOutcome};
use crate::state::AppContext;
use crate::utils::errors::{EventEaseError, Result};
use crate::utils::helpers::generate_request_id;
use crate::utils::logging::log_rejection;

pub use pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    PastEvents,
    EventDetails { slug: String },
    CreateEvent,
    Contact,
    About,
    Login,
    Success,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::PastEvents => "past_events",
            Route::EventDetails { .. } => "event_details",
            Route::CreateEvent => "event_create",
            Route::Contact => "contactus",
            Route::About => "about",
            Route::Login => "login",
            Route::Success => "success",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PastEvents => "/past-events/".to_string(),
            Route::EventDetails { slug } => format!("/event/{}/", slug),
            Route::CreateEvent => "/create/".to_string(),
            Route::Contact => "/contactus/".to_string(),
            Route::About => "/about/".to_string(),
            Route::Login => "/login/".to_string(),
            Route::Success => "/success/".to_string(),
        }
    }
}

/// A parsed request from the HTTP layer
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub route: Route,
    pub actor: Actor,
    pub form: FormData,
    pub image: Option<ImageUpload>,
}

impl Request {
    pub fn get(route: Route, actor: Actor) -> Self {
        Self { method: Method::Get, route, actor, form: FormData::new(), image: None }
    }

    pub fn post(route: Route, actor: Actor, form: FormData) -> Self {
        Self { method: Method::Post, route, actor, form, image: None }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// What the rendering layer receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    UpcomingEvents(Vec<Event>),
    PastEvents(Vec<Event>),
    EventDetails(EventDetails),
    Page(Page),
    Registration { outcome: RegistrationOutcome, redirect: Route },
    EventCreated { event: Event, redirect: Route },
    ContactSent { message: ContactMessage, redirect: Route },
    FormInvalid(FormErrors),
    LoginRequired { next: String },
    NotFound(String),
    Conflict(String),
    MethodNotAllowed,
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::UpcomingEvents(_) => "upcoming_events",
            Outcome::PastEvents(_) => "past_events",
            Outcome::EventDetails(_) => "event_details",
            Outcome::Page(_) => "page",
            Outcome::Registration { .. } => "registration",
            Outcome::EventCreated { .. } => "event_created",
            Outcome::ContactSent { .. } => "contact_sent",
            Outcome::FormInvalid(_) => "form_invalid",
            Outcome::LoginRequired { .. } => "login_required",
            Outcome::NotFound(_) => "not_found",
            Outcome::Conflict(_) => "conflict",
            Outcome::MethodNotAllowed => "method_not_allowed",
        }
    }

    /// Where the client should be sent next, for outcomes that redirect
    pub fn redirect(&self) -> Option<String> {
        match self {
            Outcome::Registration { redirect, .. }
            | Outcome::EventCreated { redirect, .. }
            | Outcome::ContactSent { redirect, .. } => Some(redirect.path()),
            Outcome::LoginRequired { next } => Some(format!("{}?next={}", Route::Login.path(), next)),
            _ => None,
        }
    }
}

/// Route a request to its handler
pub async fn dispatch(ctx: &AppContext, request: Request) -> Result<Outcome> {
    let route = request.route.clone();

    let result = match (request.method, &request.route) {
        (Method::Get, Route::Home) => events::upcoming(ctx).await,
        (Method::Get, Route::PastEvents) => events::past(ctx).await,
        (Method::Get, Route::EventDetails { slug }) => events::details(ctx, slug, request.actor).await,
        (Method::Post, Route::EventDetails { slug }) => {
            registration::submit(ctx, slug, request.actor, &request.form).await
        }
        (Method::Get, Route::CreateEvent) => events::create_form(ctx, request.actor),
        (Method::Post, Route::CreateEvent) => events::create(ctx, &request).await,
        (Method::Get, Route::Contact) => Ok(Outcome::Page(Page::ContactForm)),
        (Method::Post, Route::Contact) => contact::submit(ctx, &request.form).await,
        (Method::Get, Route::About) => Ok(Outcome::Page(Page::About)),
        (Method::Get, Route::Login) => Ok(Outcome::Page(Page::Login)),
        (Method::Get, Route::Success) => Ok(Outcome::Page(Page::Success)),
        _ => Ok(Outcome::MethodNotAllowed),
    };

    resolve(&route, result)
}

/// Dispatch with request logging
pub async fn handle_request(ctx: &AppContext, request: Request) -> Result<Outcome> {
    let request_id = generate_request_id();
    let span = tracing::info_span!("request", request_id = %request_id, route = request.route.name());

    async move {
        ctx.logging.log_request(&request_id, &request);
        let started = Instant::now();
        let logged = request.clone();
        let result = dispatch(ctx, request).await;
        ctx.logging.log_outcome(&request_id, &logged, &result, started.elapsed());
        result
    }
    .instrument(span)
    .await
}

/// Turn recoverable errors into outcomes the rendering layer can show
fn resolve(route: &Route, result: Result<Outcome>) -> Result<Outcome> {
    match result {
        Err(EventEaseError::Validation(errors)) => {
            log_rejection(route.name(), "validation");
            Ok(Outcome::FormInvalid(errors))
        }
        Err(EventEaseError::AuthenticationRequired) => {
            log_rejection(route.name(), "authentication");
            Ok(Outcome::LoginRequired { next: route.path() })
        }
        Err(EventEaseError::EventNotFound { slug }) => Ok(Outcome::NotFound(slug)),
        Err(EventEaseError::NotFound(what)) => {
            log_rejection(route.name(), &what);
            Ok(Outcome::NotFound(what))
        }
        Err(EventEaseError::Conflict(message)) => {
            log_rejection(route.name(), &message);
            Ok(Outcome::Conflict(message))
        }
        other => other,
    }
}
