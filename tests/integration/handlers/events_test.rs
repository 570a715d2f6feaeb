//! Event listings and event creation

use assert_matches::assert_matches;
use eventease::database::Store;
use eventease::handlers::{Outcome, Page, Request, Route};
use eventease::middleware::Actor;
use eventease::models::EventStatus;
use tokio_test::assert_ok;

use crate::helpers::*;

#[tokio::test]
async fn test_created_event_is_pending_and_not_listed() {
    let ctx = TestContext::new();

    let event = ctx.create_event("Shim Sham Practice").await;
    assert_eq!(event.status, EventStatus::Pending);
    assert_eq!(event.slug, "shim-sham-practice");
    assert_eq!(event.created_by, 1);

    let outcome = assert_ok!(ctx.get(Route::Home, Actor::Anonymous).await);
    assert_eq!(outcome, Outcome::UpcomingEvents(vec![]));
}

#[tokio::test]
async fn test_auto_approve_publishes_new_events() {
    let ctx = TestContext::auto_approving();

    let event = ctx.create_event("Shim Sham Practice").await;
    assert_eq!(event.status, EventStatus::Approved);

    let outcome = assert_ok!(ctx.get(Route::Home, Actor::Anonymous).await);
    assert_eq!(outcome, Outcome::UpcomingEvents(vec![event]));
}

#[tokio::test]
async fn test_colliding_titles_get_numbered_slugs() {
    let ctx = TestContext::new();

    let first = ctx.create_event("Swing Night").await;
    let second = ctx.create_event("Swing Night").await;
    let third = ctx.create_event("Swing  Night!").await;

    assert_eq!(first.slug, "swing-night");
    assert_eq!(second.slug, "swing-night-1");
    assert_eq!(third.slug, "swing-night-2");
}

#[tokio::test]
async fn test_listings_filter_status_and_order_by_schedule() {
    let ctx = TestContext::new();
    let store = &ctx.store;

    let later = assert_ok!(
        store.create_event(event_row("Later", "later", days_from_today(10), at(18, 0), EventStatus::Approved, 1)).await
    );
    let today_evening = assert_ok!(
        store.create_event(event_row("Evening", "evening", today(), at(20, 0), EventStatus::Approved, 1)).await
    );
    let today_morning = assert_ok!(
        store.create_event(event_row("Morning", "morning", today(), at(9, 30), EventStatus::Approved, 1)).await
    );
    let yesterday = assert_ok!(
        store.create_event(event_row("Yesterday", "yesterday", days_from_today(-1), at(19, 0), EventStatus::Approved, 1)).await
    );
    let last_month = assert_ok!(
        store.create_event(event_row("Last month", "last-month", days_from_today(-30), at(19, 0), EventStatus::Approved, 1)).await
    );
    assert_ok!(
        store.create_event(event_row("Hidden", "hidden", days_from_today(3), at(19, 0), EventStatus::Pending, 1)).await
    );
    assert_ok!(
        store.create_event(event_row("Hidden past", "hidden-past", days_from_today(-3), at(19, 0), EventStatus::Pending, 1)).await
    );

    let upcoming = assert_ok!(ctx.get(Route::Home, Actor::Anonymous).await);
    assert_eq!(upcoming, Outcome::UpcomingEvents(vec![today_morning, today_evening, later]));

    let past = assert_ok!(ctx.get(Route::PastEvents, Actor::Anonymous).await);
    assert_eq!(past, Outcome::PastEvents(vec![yesterday, last_month]));
}

#[tokio::test]
async fn test_pending_event_details_are_reachable_by_slug() {
    let ctx = TestContext::new();
    let event = ctx.create_event("Members Only").await;

    let outcome = assert_ok!(ctx.get(details_route(&event), Actor::Anonymous).await);

    assert_matches!(outcome, Outcome::EventDetails(details) if details.event == event && details.registration_count == 0);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let ctx = TestContext::new();

    let outcome = assert_ok!(ctx.get(Route::EventDetails { slug: "nope".to_string() }, Actor::Anonymous).await);

    assert_eq!(outcome, Outcome::NotFound("nope".to_string()));
}

#[tokio::test]
async fn test_create_redirects_to_success() {
    let ctx = TestContext::new();

    let outcome = assert_ok!(ctx.post(Route::CreateEvent, MEMBER, event_form("Collegiate Shag")).await);

    assert_eq!(outcome.redirect().as_deref(), Some("/success/"));
    assert_eq!(ctx.store.event_total().await, 1);
}

#[tokio::test]
async fn test_create_requires_login() {
    let ctx = TestContext::new();

    let form_page = assert_ok!(ctx.get(Route::CreateEvent, Actor::Anonymous).await);
    assert_eq!(form_page, Outcome::LoginRequired { next: "/create/".to_string() });

    let submit = assert_ok!(ctx.post(Route::CreateEvent, Actor::Anonymous, event_form("Sneaky")).await);
    assert_eq!(submit, Outcome::LoginRequired { next: "/create/".to_string() });
    assert_eq!(ctx.store.event_total().await, 0);

    let member_page = assert_ok!(ctx.get(Route::CreateEvent, MEMBER).await);
    assert_eq!(member_page, Outcome::Page(Page::CreateEventForm));
}

#[tokio::test]
async fn test_invalid_event_form_reports_every_field() {
    let ctx = TestContext::new();
    let payload = form(&[
        ("title", ""),
        ("description", "Social"),
        ("date", "31/12/2030"),
        ("time", "late"),
        ("location", ""),
    ]);

    let outcome = assert_ok!(ctx.post(Route::CreateEvent, MEMBER, payload).await);

    match outcome {
        Outcome::FormInvalid(errors) => {
            assert_eq!(errors.get("title"), ["This field is required."]);
            assert_eq!(errors.get("date"), ["Enter a valid date."]);
            assert_eq!(errors.get("time"), ["Enter a valid time."]);
            assert_eq!(errors.get("location"), ["This field is required."]);
            assert!(!errors.contains("description"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(ctx.store.event_total().await, 0);
}

#[tokio::test]
async fn test_featured_image_size_boundary() {
    let ctx = TestContext::new();

    let exact = Request::post(Route::CreateEvent, MEMBER, event_form("Poster Exact")).with_image(image_of_size(3 * MIB));
    let outcome = assert_ok!(eventease::dispatch(&ctx.app, exact).await);
    assert_matches!(outcome, Outcome::EventCreated { event, .. } if event.featured_image.as_deref() == Some("poster.jpg"));

    let over = Request::post(Route::CreateEvent, MEMBER, event_form("Poster Over")).with_image(image_of_size(3 * MIB + 1));
    let outcome = assert_ok!(eventease::dispatch(&ctx.app, over).await);
    assert_matches!(
        outcome,
        Outcome::FormInvalid(errors) if errors.get("featured_image") == ["Image file too large ( > 3 MB )."]
    );

    let without = ctx.create_event("No Poster").await;
    assert_eq!(without.featured_image, None);
    assert_eq!(ctx.store.event_total().await, 2);
}
