// src/application/commands/posts/mod.rs
mod create;
mod service;
mod toggle;

pub use create::CreatePostCommand;
pub use service::PostCommandService;
pub use toggle::TogglePostCommand;
