//! Contact form

use assert_matches::assert_matches;
use eventease::handlers::{Outcome, Page, Route};
use eventease::middleware::Actor;
use tokio_test::assert_ok;

use crate::helpers::*;

#[tokio::test]
async fn test_contact_form_page() {
    let ctx = TestContext::new();

    let outcome = assert_ok!(ctx.get(Route::Contact, Actor::Anonymous).await);

    assert_eq!(outcome, Outcome::Page(Page::ContactForm));
}

#[tokio::test]
async fn test_anonymous_contact_message_is_stored() {
    let ctx = TestContext::new();
    let payload = contact_form("Frankie", "frankie@example.com", "Any events in June?");

    let outcome = assert_ok!(ctx.post(Route::Contact, Actor::Anonymous, payload).await);

    assert_matches!(&outcome, Outcome::ContactSent { message, .. } if message.name == "Frankie");
    assert_eq!(outcome.redirect().as_deref(), Some("/success/"));

    let stored = ctx.store.contact_messages().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "frankie@example.com");
    assert_eq!(stored[0].message, "Any events in June?");
}

#[tokio::test]
async fn test_invalid_contact_message_is_not_stored() {
    let ctx = TestContext::new();
    let payload = contact_form("", "not-an-email", "");

    let outcome = assert_ok!(ctx.post(Route::Contact, Actor::Anonymous, payload).await);

    match outcome {
        Outcome::FormInvalid(errors) => {
            assert_eq!(errors.get("name"), ["This field is required."]);
            assert_eq!(errors.get("email"), ["Enter a valid email address."]);
            assert_eq!(errors.get("message"), ["This field is required."]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(ctx.store.contact_messages().await.is_empty());
}
