// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::{MAX_INSERT_ATTEMPTS, validation::SubmissionCheck},
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{Content, Summary, Title, derive_excerpt},
        errors::DomainError,
        post::NewPost,
    },
};

/// Raw admin form input. A blank excerpt is derived from the content.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = command.title.trim();
        let excerpt = command.excerpt.trim();
        let content = command.content.trim();

        let mut check = SubmissionCheck::new();
        check
            .require("Title", title)
            .max_chars("Title", title, self.limits.title_max_length);
        if let Some(max) = self.limits.excerpt_max_length {
            check.max_chars("Excerpt", excerpt, max);
        }
        check.require("Content", content).finish()?;

        let excerpt = if excerpt.is_empty() {
            let window = self.limits.derived_excerpt_length.ok_or_else(|| {
                DomainError::Configuration("posts need a derived excerpt length".into())
            })?;
            derive_excerpt(content, window)
        } else {
            excerpt.to_owned()
        };

        let title = Title::new(title)?;
        let excerpt = Summary::new(excerpt)?;
        let content = Content::new(content)?;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(&*self.read_repo, &title, &self.limits)
                .await?;

            let new_post = NewPost::new(
                title.clone(),
                slug,
                excerpt.clone(),
                content.clone(),
                self.clock.now(),
            );

            match self.write_repo.insert(new_post).await {
                Ok(post) => {
                    tracing::info!(post_id = %post.id, slug = %post.slug, "post created");
                    return Ok(post.into());
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::warn!(attempt, %reason, "post slug taken during insert, resolving again");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not reserve a unique slug for this post, please retry",
        ))
    }
}
