// src/domain/tool/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTool, Tool};
pub use repository::{ToolReadRepository, ToolWriteRepository};
pub use value_objects::ToolId;
