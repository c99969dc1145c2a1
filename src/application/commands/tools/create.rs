// src/application/commands/tools/create.rs
use super::ToolCommandService;
use crate::{
    application::{
        commands::{MAX_INSERT_ATTEMPTS, validation::SubmissionCheck},
        dto::ToolDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{Content, Summary, Title},
        errors::DomainError,
        tool::NewTool,
    },
};

/// Raw admin form input; whitespace is trimmed before validation.
#[derive(Debug, Clone)]
pub struct CreateToolCommand {
    pub title: String,
    pub summary: String,
    pub content: String,
}

impl ToolCommandService {
    pub async fn create_tool(&self, command: CreateToolCommand) -> ApplicationResult<ToolDto> {
        let title = command.title.trim();
        let summary = command.summary.trim();
        let content = command.content.trim();

        let mut check = SubmissionCheck::new();
        check
            .require("Title", title)
            .max_chars("Title", title, self.limits.title_max_length)
            .require("Summary", summary);
        if let Some(max) = self.limits.summary_max_length {
            check.max_chars("Summary", summary, max);
        }
        check.require("Content", content).finish()?;

        let title = Title::new(title)?;
        let summary = Summary::new(summary)?;
        let content = Content::new(content)?;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(&*self.read_repo, &title, &self.limits)
                .await?;

            let new_tool = NewTool::new(
                title.clone(),
                slug,
                summary.clone(),
                content.clone(),
                self.clock.now(),
            );

            match self.write_repo.insert(new_tool).await {
                Ok(tool) => {
                    tracing::info!(tool_id = %tool.id, slug = %tool.slug, "tool created");
                    return Ok(tool.into());
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::warn!(attempt, %reason, "tool slug taken during insert, resolving again");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not reserve a unique slug for this tool, please retry",
        ))
    }
}
