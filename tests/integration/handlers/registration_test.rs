//! Registration flow on the event details page

use assert_matches::assert_matches;
use eventease::handlers::{Outcome, Route};
use eventease::middleware::Actor;
use eventease::services::{RegistrationOutcome, RegistrationState};
use tokio_test::assert_ok;

use crate::helpers::*;

#[tokio::test]
async fn test_register_creates_registration_and_redirects_back() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Lindy Night").await;

    let outcome = assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("Bringing a friend")).await);

    assert_matches!(
        &outcome,
        Outcome::Registration { outcome: RegistrationOutcome::Created(registration), redirect }
            if registration.note.as_deref() == Some("Bringing a friend")
                && *redirect == Route::EventDetails { slug: event.slug.clone() }
    );
    assert_eq!(outcome.redirect(), Some(format!("/event/{}/", event.slug)));
    assert_eq!(ctx.registration_count(&event).await, 1);
}

#[tokio::test]
async fn test_register_twice_keeps_a_single_registration() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Lindy Night").await;

    assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("first")).await);
    let second = assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("second")).await);

    assert_matches!(
        second,
        Outcome::Registration { outcome: RegistrationOutcome::AlreadyRegistered(existing), .. }
            if existing.note.as_deref() == Some("first")
    );
    assert_eq!(ctx.registration_count(&event).await, 1);
}

#[tokio::test]
async fn test_update_with_same_note_is_a_no_op() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Balboa Workshop").await;

    let created = match assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("vegetarian")).await) {
        Outcome::Registration { outcome: RegistrationOutcome::Created(registration), .. } => registration,
        other => panic!("unexpected outcome: {:?}", other),
    };

    let outcome = assert_ok!(ctx.post(details_route(&event), MEMBER, update_form("vegetarian")).await);

    assert_matches!(
        outcome,
        Outcome::Registration { outcome: RegistrationOutcome::Unchanged(unchanged), .. }
            if unchanged == created
    );
}

#[tokio::test]
async fn test_update_overwrites_note() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Balboa Workshop").await;

    assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("vegetarian")).await);
    let outcome = assert_ok!(ctx.post(details_route(&event), MEMBER, update_form("")).await);

    match outcome {
        Outcome::Registration { outcome, .. } => {
            assert_eq!(outcome.kind(), "updated");
            assert_eq!(outcome.state(), RegistrationState::Registered { note: None });
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_removes_exactly_one_registration() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Blues Social").await;

    assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("")).await);
    assert_ok!(ctx.post(details_route(&event), OTHER_MEMBER, registration_form("")).await);
    assert_eq!(ctx.registration_count(&event).await, 2);

    let outcome = assert_ok!(ctx.post(details_route(&event), MEMBER, cancel_form()).await);
    assert_matches!(outcome, Outcome::Registration { outcome: RegistrationOutcome::Cancelled, .. });
    assert_eq!(ctx.registration_count(&event).await, 1);

    let state = assert_ok!(ctx.app.services.registration_service.state(&event, 1).await);
    assert!(!state.is_registered());
}

#[tokio::test]
async fn test_update_and_cancel_without_registration_conflict() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Blues Social").await;

    let update = assert_ok!(ctx.post(details_route(&event), MEMBER, update_form("late")).await);
    assert_matches!(update, Outcome::Conflict(_));

    let cancel = assert_ok!(ctx.post(details_route(&event), MEMBER, cancel_form()).await);
    assert_matches!(cancel, Outcome::Conflict(_));

    assert_eq!(ctx.registration_count(&event).await, 0);
}

#[tokio::test]
async fn test_registration_requires_login() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Blues Social").await;

    let outcome = assert_ok!(ctx.post(details_route(&event), Actor::Anonymous, registration_form("")).await);

    assert_eq!(outcome, Outcome::LoginRequired { next: format!("/event/{}/", event.slug) });
    assert_eq!(ctx.registration_count(&event).await, 0);
}

#[tokio::test]
async fn test_overlong_note_is_rejected_without_writing() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Blues Social").await;
    let note = "x".repeat(256);

    let outcome = assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form(&note)).await);

    assert_matches!(outcome, Outcome::FormInvalid(errors) if errors.contains("note"));
    assert_eq!(ctx.registration_count(&event).await, 0);
}

#[tokio::test]
async fn test_registering_for_unknown_event_is_not_found() {
    let ctx = TestContext::new();

    let outcome = assert_ok!(
        ctx.post(Route::EventDetails { slug: "missing".to_string() }, MEMBER, registration_form("")).await
    );

    assert_eq!(outcome, Outcome::NotFound("missing".to_string()));
}

#[tokio::test]
async fn test_details_show_registration_of_the_viewer() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Lindy Night").await;
    assert_ok!(ctx.post(details_route(&event), MEMBER, registration_form("front row")).await);

    let mine = assert_ok!(ctx.get(details_route(&event), MEMBER).await);
    assert_matches!(
        mine,
        Outcome::EventDetails(details)
            if details.registration.as_ref().and_then(|r| r.note.as_deref()) == Some("front row")
                && details.registration_count == 1
    );

    let theirs = assert_ok!(ctx.get(details_route(&event), OTHER_MEMBER).await);
    assert_matches!(theirs, Outcome::EventDetails(details) if details.registration.is_none());

    let anonymous = assert_ok!(ctx.get(details_route(&event), Actor::Anonymous).await);
    assert_matches!(anonymous, Outcome::EventDetails(details) if details.registration.is_none());
}

#[tokio::test]
async fn test_first_time_account_can_register() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Lindy Night").await;
    let newcomer = Actor::Account(42);
    assert!(!ctx.store.has_account(42).await);

    let outcome = assert_ok!(ctx.post(details_route(&event), newcomer, registration_form("")).await);

    assert_matches!(outcome, Outcome::Registration { outcome: RegistrationOutcome::Created(r), .. } if r.user_id == 42);
    assert!(ctx.store.has_account(42).await);
    assert_eq!(ctx.registration_count(&event).await, 1);
}
