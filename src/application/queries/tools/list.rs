// src/application/queries/tools/list.rs
use super::ToolQueryService;
use crate::application::{dto::ToolDto, error::ApplicationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListToolsQuery {
    /// Admin listings include hidden tools.
    pub include_hidden: bool,
    pub limit: Option<u32>,
}

impl ToolQueryService {
    pub async fn list_tools(&self, query: ListToolsQuery) -> ApplicationResult<Vec<ToolDto>> {
        let tools = self
            .read_repo
            .list(query.include_hidden, query.limit)
            .await?;
        Ok(tools.into_iter().map(Into::into).collect())
    }
}
