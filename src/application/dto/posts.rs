// src/application/dto/posts.rs
use crate::domain::content::paragraphs;
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt.into_inner(),
            content: post.content.into_inner(),
            created_at: post.created_at,
            published: post.published,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub paragraphs: Vec<String>,
}

impl From<Post> for PostDetailDto {
    fn from(post: Post) -> Self {
        let paragraphs = paragraphs(post.content.as_str());
        Self {
            post: post.into(),
            paragraphs,
        }
    }
}
