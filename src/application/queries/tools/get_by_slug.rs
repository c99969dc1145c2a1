// src/application/queries/tools/get_by_slug.rs
use super::ToolQueryService;
use crate::{
    application::{
        dto::ToolDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::Slug,
};

pub struct GetToolBySlugQuery {
    pub slug: String,
}

impl ToolQueryService {
    /// Hidden tools are reported as missing.
    pub async fn get_published_tool(
        &self,
        query: GetToolBySlugQuery,
    ) -> ApplicationResult<ToolDetailDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("tool not found"))?;

        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|tool| tool.published)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("tool not found"))
    }
}
