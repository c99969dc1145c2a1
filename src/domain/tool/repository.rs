// src/domain/tool/repository.rs
use crate::domain::content::{Slug, SlugIndex};
use crate::domain::errors::DomainResult;
use crate::domain::tool::entity::{NewTool, Tool};
use crate::domain::tool::value_objects::ToolId;
use async_trait::async_trait;

#[async_trait]
pub trait ToolWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, tool: NewTool) -> DomainResult<Tool>;
    /// Fails with `DomainError::NotFound` for an unknown id.
    async fn toggle_published(&self, id: ToolId) -> DomainResult<Tool>;
}

#[async_trait]
pub trait ToolReadRepository: SlugIndex {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tool>>;
    /// Newest first. Hidden tools are skipped unless `include_hidden` is set.
    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Tool>>;
}
