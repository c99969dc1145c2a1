// src/domain/post/entity.rs
use crate::domain::content::{Content, Slug, Summary, Title};
use crate::domain::post::value_objects::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Summary,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl Post {
    /// Flips visibility and returns the new state.
    pub fn toggle_published(&mut self) -> bool {
        self.published = !self.published;
        self.published
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Summary,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

impl NewPost {
    /// New posts go live immediately.
    pub fn new(
        title: Title,
        slug: Slug,
        excerpt: Summary,
        content: Content,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            excerpt,
            content,
            created_at,
            published: true,
        }
    }

    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            created_at: self.created_at,
            published: self.published,
        }
    }
}
