// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListPostsQuery {
    /// Admin listings include hidden posts.
    pub include_hidden: bool,
    pub limit: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let posts = self
            .read_repo
            .list(query.include_hidden, query.limit)
            .await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
