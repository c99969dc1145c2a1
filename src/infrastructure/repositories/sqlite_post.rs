// src/infrastructure/repositories/sqlite_post.rs
use super::map_sqlx;
use crate::domain::content::{Content, Slug, SlugIndex, Summary, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{NewPost, Post, PostId, PostReadRepository, PostWriteRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, created_at, is_published";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    created_at: DateTime<Utc>,
    is_published: bool,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: Summary::new(row.excerpt)?,
            content: Content::new(row.content)?,
            created_at: row.created_at,
            published: row.is_published,
        })
    }
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            content,
            created_at,
            published,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, excerpt, content, created_at, is_published)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt.as_str())
        .bind(content.as_str())
        .bind(created_at)
        .bind(published)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn toggle_published(&self, id: PostId) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET is_published = NOT is_published WHERE id = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }
}

#[async_trait]
impl SlugIndex for SqlitePostReadRepository {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM posts WHERE slug = ?")
            .bind(slug)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        if !include_hidden {
            builder.push(" WHERE is_published = 1");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
