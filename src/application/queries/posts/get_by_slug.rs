// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Hidden posts are reported as missing.
    pub async fn get_published_post(
        &self,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDetailDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("post not found"))?;

        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.published)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
