// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_post;
mod sqlite_tool;

pub use error::map_sqlx;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_tool::{SqliteToolReadRepository, SqliteToolWriteRepository};
