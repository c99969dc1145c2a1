// src/application/commands/tools/toggle.rs
use super::ToolCommandService;
use crate::{
    application::{
        dto::ToolDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, tool::ToolId},
};

pub struct ToggleToolCommand {
    pub id: i64,
}

impl ToolCommandService {
    pub async fn toggle_tool(&self, command: ToggleToolCommand) -> ApplicationResult<ToolDto> {
        let id = ToolId::new(command.id).map_err(|_| ApplicationError::not_found("tool not found"))?;

        let tool = self
            .write_repo
            .toggle_published(id)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::not_found("tool not found"),
                other => other.into(),
            })?;

        tracing::info!(tool_id = %tool.id, published = tool.published, "tool visibility toggled");
        Ok(tool.into())
    }
}
