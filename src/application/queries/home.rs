// src/application/queries/home.rs
use std::sync::Arc;

use chrono::Datelike;

use crate::{
    application::{dto::HomeDto, error::ApplicationResult, ports::time::Clock},
    domain::{post::PostReadRepository, tool::ToolReadRepository},
};

/// Posts featured on the home page.
pub const HOME_POST_LIMIT: u32 = 3;

pub struct HomeQueryService {
    tool_repo: Arc<dyn ToolReadRepository>,
    post_repo: Arc<dyn PostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl HomeQueryService {
    pub fn new(
        tool_repo: Arc<dyn ToolReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tool_repo,
            post_repo,
            clock,
        }
    }

    /// Every published tool plus the latest published posts.
    pub async fn home(&self) -> ApplicationResult<HomeDto> {
        let tools = self.tool_repo.list(false, None).await?;
        let posts = self.post_repo.list(false, Some(HOME_POST_LIMIT)).await?;

        Ok(HomeDto {
            tools: tools.into_iter().map(Into::into).collect(),
            posts: posts.into_iter().map(Into::into).collect(),
            current_year: self.clock.now().year(),
        })
    }
}
