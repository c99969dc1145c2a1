// src/application/queries/tools/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetToolBySlugQuery;
pub use list::ListToolsQuery;
pub use service::ToolQueryService;
