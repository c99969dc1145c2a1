// src/domain/post/repository.rs
use crate::domain::content::{Slug, SlugIndex};
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` for an unknown id.
    async fn toggle_published(&self, id: PostId) -> DomainResult<Post>;
}

#[async_trait]
pub trait PostReadRepository: SlugIndex {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Newest first. Hidden posts are skipped unless `include_hidden` is set.
    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Post>>;
}
