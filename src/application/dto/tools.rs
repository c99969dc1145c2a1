// src/application/dto/tools.rs
use crate::domain::content::paragraphs;
use crate::domain::tool::Tool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl From<Tool> for ToolDto {
    fn from(tool: Tool) -> Self {
        Self {
            id: tool.id.into(),
            title: tool.title.into_inner(),
            slug: tool.slug.into_inner(),
            summary: tool.summary.into_inner(),
            content: tool.content.into_inner(),
            created_at: tool.created_at,
            published: tool.published,
        }
    }
}

/// A tool as shown on its detail page, with the content split into paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolDetailDto {
    #[serde(flatten)]
    pub tool: ToolDto,
    pub paragraphs: Vec<String>,
}

impl From<Tool> for ToolDetailDto {
    fn from(tool: Tool) -> Self {
        let paragraphs = paragraphs(tool.content.as_str());
        Self {
            tool: tool.into(),
            paragraphs,
        }
    }
}
