// src/domain/tool/entity.rs
use crate::domain::content::{Content, Slug, Summary, Title};
use crate::domain::tool::value_objects::ToolId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tool {
    pub id: ToolId,
    pub title: Title,
    pub slug: Slug,
    pub summary: Summary,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl Tool {
    /// Flips visibility and returns the new state.
    pub fn toggle_published(&mut self) -> bool {
        self.published = !self.published;
        self.published
    }
}

#[derive(Debug, Clone)]
pub struct NewTool {
    pub title: Title,
    pub slug: Slug,
    pub summary: Summary,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl NewTool {
    /// New tools go live immediately.
    pub fn new(
        title: Title,
        slug: Slug,
        summary: Summary,
        content: Content,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            summary,
            content,
            created_at,
            published: true,
        }
    }

    pub fn into_tool(self, id: ToolId) -> Tool {
        Tool {
            id,
            title: self.title,
            slug: self.slug,
            summary: self.summary,
            content: self.content,
            created_at: self.created_at,
            published: self.published,
        }
    }
}
