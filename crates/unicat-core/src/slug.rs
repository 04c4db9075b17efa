//! # Slug Derivation
//!
//! Slugs are the URL-safe identifiers used in detail-page paths. They are
//! derived from the university name at load time and are only required to
//! be unique within a single country's dataset, since every lookup is
//! scoped by `(country, slug)`.

use std::collections::HashSet;

use crate::university::University;

/// Derive a slug from a display name.
///
/// The name is lowercased, every maximal run of characters outside ASCII
/// `a-z` and `0-9` collapses to a single `-`, and no `-` is left at either
/// end. Non-ASCII letters count as separators.
///
/// ```
/// use unicat_core::slugify;
///
/// assert_eq!(slugify("St. Andrew's College"), "st-andrew-s-college");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slugs that occur more than once in `records`, in first-seen order.
///
/// Only the first record carrying a duplicated slug is reachable through a
/// slug lookup; this reports the collisions so loaders can flag them.
pub fn duplicate_slugs(records: &[University]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        if !seen.insert(record.slug.as_str()) && reported.insert(record.slug.as_str()) {
            duplicates.push(record.slug.clone());
        }
    }

    duplicates
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn slugify_is_idempotent(name in "\\PC{0,60}") {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn slug_alphabet_is_url_safe(name in "\\PC{0,60}") {
            let slug = slugify(&name);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }
    }
}
