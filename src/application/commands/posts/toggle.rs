// src/application/commands/posts/toggle.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, post::PostId},
};

pub struct TogglePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn toggle_post(&self, command: TogglePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id).map_err(|_| ApplicationError::not_found("post not found"))?;

        let post = self
            .write_repo
            .toggle_published(id)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::not_found("post not found"),
                other => other.into(),
            })?;

        tracing::info!(post_id = %post.id, published = post.published, "post visibility toggled");
        Ok(post.into())
    }
}
