// src/domain/content/services.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::content::{
    limits::EntityLimits,
    repository::SlugIndex,
    slug::{SlugCandidates, SlugError, fallback_slug},
    value_objects::{Slug, Title},
};
use crate::domain::errors::DomainResult;

/// Domain service producing slugs that are unused within one entity type.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub async fn generate_unique_slug<I>(
        &self,
        index: &I,
        title: &Title,
        limits: &EntityLimits,
    ) -> DomainResult<Slug>
    where
        I: SlugIndex + ?Sized,
    {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            fallback_slug(limits.fallback_prefix, self.clock.now())
        } else {
            base
        };

        for candidate in SlugCandidates::new(&base_slug, Some(limits.slug_max_length))? {
            if !index.slug_exists(&candidate).await? {
                return Slug::new(candidate);
            }
        }

        Err(SlugError::Exhausted { base: base_slug }.into())
    }
}
