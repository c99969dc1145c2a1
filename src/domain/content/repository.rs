// src/domain/content/repository.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Slug lookups scoped to a single entity type.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
}
