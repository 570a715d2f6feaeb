//! Slug assignment
//!
//! Derives a URL-safe identifier from an event title. Collisions are resolved
//! by trying `base`, `base-1`, `base-2`, ... and taking the first free one.
//! Uniqueness holds only at the moment of the check; the store's unique
//! constraint rejects a racing writer.

use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::database::Store;
use crate::utils::errors::{EventEaseError, Result};

/// Column width of `events.slug`
pub const SLUG_MAX_LEN: usize = 200;

/// Room kept free for a `-N` suffix
const SUFFIX_RESERVE: usize = 10;

/// Base used when a title contains nothing slug-worthy
const FALLBACK_SLUG: &str = "event";

/// Lowercase ASCII alphanumerics joined by single hyphens.
///
/// The title is NFKD-decomposed first so accented letters keep their base
/// letter ("Café" gives "cafe"). Every run of other characters (whitespace,
/// punctuation, remaining non-ASCII) becomes one separator; separators at
/// either end are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > SLUG_MAX_LEN - SUFFIX_RESERVE {
        slug.truncate(SLUG_MAX_LEN - SUFFIX_RESERVE);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// `base`, then `base-1`, `base-2`, ...
pub fn candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string()).chain((1u64..).map(move |n| format!("{}-{}", base, n)))
}

/// First candidate for which `is_taken` is false
pub fn first_free_slug(base: &str, mut is_taken: impl FnMut(&str) -> bool) -> String {
    candidates(base)
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Slug for `title` that no stored event uses yet. Issues one lookup per candidate.
pub async fn assign_unique_slug(store: &dyn Store, title: &str) -> Result<String> {
    let base = slugify(title);

    for (lookups, candidate) in candidates(&base).enumerate() {
        if !store.slug_exists(&candidate).await? {
            debug!(slug = %candidate, lookups = lookups + 1, "Assigned slug");
            return Ok(candidate);
        }
    }

    Err(EventEaseError::Conflict(format!("No free slug left for {}", base)))
}
