// src/domain/content/limits.rs
use crate::domain::content::slug::{MIN_SLUG_LENGTH, is_valid_slug};
use crate::domain::errors::{DomainError, DomainResult};

/// Digits in a unix timestamp for the foreseeable future.
const FALLBACK_TIMESTAMP_WIDTH: usize = 10;

/// Field bounds for one entity type, declared statically rather than read
/// from the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLimits {
    pub title_max_length: usize,
    pub summary_max_length: Option<usize>,
    pub excerpt_max_length: Option<usize>,
    pub slug_max_length: usize,
    /// Window used when an excerpt is derived from the content.
    pub derived_excerpt_length: Option<usize>,
    /// Prefix of the timestamped slug used for titles without usable text.
    pub fallback_prefix: &'static str,
}

impl EntityLimits {
    pub const TOOL: Self = Self {
        title_max_length: 140,
        summary_max_length: Some(280),
        excerpt_max_length: None,
        slug_max_length: 160,
        derived_excerpt_length: None,
        fallback_prefix: "tool",
    };

    pub const POST: Self = Self {
        title_max_length: 160,
        summary_max_length: None,
        excerpt_max_length: Some(280),
        slug_max_length: 180,
        derived_excerpt_length: Some(200),
        fallback_prefix: "post",
    };

    /// Rejects bounds that could never produce a valid, disambiguated slug.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title_max_length == 0 {
            return Err(DomainError::Configuration(
                "title max length must be positive".into(),
            ));
        }

        if self.slug_max_length < MIN_SLUG_LENGTH {
            return Err(DomainError::Configuration(format!(
                "slug max length {} is below the minimum of {MIN_SLUG_LENGTH}",
                self.slug_max_length
            )));
        }

        if !is_valid_slug(self.fallback_prefix) {
            return Err(DomainError::Configuration(format!(
                "fallback prefix `{}` is not a valid slug",
                self.fallback_prefix
            )));
        }

        if self.fallback_prefix.len() + 1 + FALLBACK_TIMESTAMP_WIDTH > self.slug_max_length {
            return Err(DomainError::Configuration(format!(
                "fallback prefix `{}` leaves no room for a timestamp",
                self.fallback_prefix
            )));
        }

        if let (Some(derived), Some(max)) = (self.derived_excerpt_length, self.excerpt_max_length) {
            if derived > max {
                return Err(DomainError::Configuration(format!(
                    "derived excerpt length {derived} exceeds the excerpt max length {max}"
                )));
            }
        }

        Ok(())
    }
}
