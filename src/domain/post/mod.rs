// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::PostId;
