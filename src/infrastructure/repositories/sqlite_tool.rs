// src/infrastructure/repositories/sqlite_tool.rs
use super::map_sqlx;
use crate::domain::content::{Content, Slug, SlugIndex, Summary, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tool::{NewTool, Tool, ToolId, ToolReadRepository, ToolWriteRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const TOOL_COLUMNS: &str = "id, title, slug, summary, content, created_at, is_published";

#[derive(Clone)]
pub struct SqliteToolWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteToolWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteToolReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteToolReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ToolRow {
    id: i64,
    title: String,
    slug: String,
    summary: String,
    content: String,
    created_at: DateTime<Utc>,
    is_published: bool,
}

impl TryFrom<ToolRow> for Tool {
    type Error = DomainError;

    fn try_from(row: ToolRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ToolId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            summary: Summary::new(row.summary)?,
            content: Content::new(row.content)?,
            created_at: row.created_at,
            published: row.is_published,
        })
    }
}

#[async_trait]
impl ToolWriteRepository for SqliteToolWriteRepository {
    async fn insert(&self, tool: NewTool) -> DomainResult<Tool> {
        let NewTool {
            title,
            slug,
            summary,
            content,
            created_at,
            published,
        } = tool;

        let row = sqlx::query_as::<_, ToolRow>(&format!(
            "INSERT INTO tools (title, slug, summary, content, created_at, is_published)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {TOOL_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary.as_str())
        .bind(content.as_str())
        .bind(created_at)
        .bind(published)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Tool::try_from(row)
    }

    async fn toggle_published(&self, id: ToolId) -> DomainResult<Tool> {
        let row = sqlx::query_as::<_, ToolRow>(&format!(
            "UPDATE tools SET is_published = NOT is_published WHERE id = ? RETURNING {TOOL_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("tool not found".into()))?;

        Tool::try_from(row)
    }
}

#[async_trait]
impl SlugIndex for SqliteToolReadRepository {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM tools WHERE slug = ?")
            .bind(slug)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl ToolReadRepository for SqliteToolReadRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tool>> {
        let row = sqlx::query_as::<_, ToolRow>(&format!(
            "SELECT {TOOL_COLUMNS} FROM tools WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tool::try_from).transpose()
    }

    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Tool>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TOOL_COLUMNS} FROM tools"));
        if !include_hidden {
            builder.push(" WHERE is_published = 1");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<ToolRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tool::try_from).collect()
    }
}
