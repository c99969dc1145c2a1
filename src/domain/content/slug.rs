// src/domain/content/slug.rs
//! Slug derivation and uniqueness resolution.
//!
//! A slug is built from lowercase ASCII letters, ASCII digits and single
//! hyphens, never starting or ending with a hyphen. [`slugify`] turns display
//! text into such a string, and [`resolve_unique_slug`] appends `-1`, `-2`, ...
//! until a candidate is unused, shortening the root so the result stays within
//! the entity's length bound.

use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Shortest bound that still fits a one-character root and the `-1` suffix.
pub const MIN_SLUG_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug max length {max_length} is too small to hold a disambiguating suffix")]
    BoundTooSmall { max_length: usize },
    #[error("no unused slug left for `{base}`")]
    Exhausted { base: String },
}

impl From<SlugError> for DomainError {
    fn from(err: SlugError) -> Self {
        match err {
            SlugError::BoundTooSmall { .. } => Self::Configuration(err.to_string()),
            SlugError::Exhausted { .. } => Self::Conflict(err.to_string()),
        }
    }
}

/// Lower-cases `text`, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, then folds each run of whitespace and hyphens into one hyphen.
///
/// The result may be empty.
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// `"{prefix}-{unix seconds}"`, used when a title has no usable characters.
pub fn fallback_slug(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}-{}", now.timestamp())
}

/// Converts display text into a slug, falling back to a timestamped
/// `fallback_prefix` slug when nothing usable is left.
pub fn slugify(text: &str, fallback_prefix: &str) -> String {
    slugify_at(text, fallback_prefix, Utc::now())
}

/// [`slugify`] with an explicit clock reading for the fallback.
pub fn slugify_at(text: &str, fallback_prefix: &str, now: DateTime<Utc>) -> String {
    let slug = normalize(text);
    if slug.is_empty() {
        fallback_slug(fallback_prefix, now)
    } else {
        slug
    }
}

/// Returns true when `value` is a well-formed slug.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// The ordered candidates tried when looking for an unused slug: the base
/// itself, then `base-1`, `base-2`, ... with the root shortened to respect
/// `max_length`.
///
/// The sequence ends once a suffix is so wide that no root character fits.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    max_length: Option<usize>,
    next_counter: u64,
    finished: bool,
}

impl SlugCandidates {
    pub fn new(base: &str, max_length: Option<usize>) -> Result<Self, SlugError> {
        let base = match max_length {
            Some(max) if max < MIN_SLUG_LENGTH => {
                return Err(SlugError::BoundTooSmall { max_length: max });
            }
            Some(max) => truncate_root(base, max),
            None => base,
        };

        Ok(Self {
            base: base.to_owned(),
            max_length,
            next_counter: 0,
            finished: base.is_empty(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let counter = self.next_counter;
        self.next_counter += 1;
        if counter == 0 {
            return Some(self.base.clone());
        }

        let suffix = format!("-{counter}");
        let root = match self.max_length {
            Some(max) => truncate_root(&self.base, max.saturating_sub(suffix.len())),
            None => self.base.as_str(),
        };

        if root.is_empty() {
            self.finished = true;
            return None;
        }

        Some(format!("{root}{suffix}"))
    }
}

/// Finds the first candidate for `base_slug` that `exists` reports as unused.
///
/// With `max_length` set the base is truncated to it before the first lookup
/// and every suffixed candidate stays within it.
pub fn resolve_unique_slug<F>(
    base_slug: &str,
    max_length: Option<usize>,
    mut exists: F,
) -> Result<String, SlugError>
where
    F: FnMut(&str) -> bool,
{
    SlugCandidates::new(base_slug, max_length)?
        .find(|candidate| !exists(candidate))
        .ok_or_else(|| SlugError::Exhausted {
            base: base_slug.to_owned(),
        })
}

// Cuts to at most `max_chars` characters without leaving a dangling hyphen.
fn truncate_root(slug: &str, max_chars: usize) -> &str {
    let end = slug
        .char_indices()
        .nth(max_chars)
        .map_or(slug.len(), |(idx, _)| idx);
    slug[..end].trim_end_matches('-')
}
