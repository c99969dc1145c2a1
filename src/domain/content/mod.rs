// src/domain/content/mod.rs
pub mod excerpt;
pub mod limits;
pub mod repository;
pub mod services;
pub mod slug;
pub mod text;
pub mod value_objects;

pub use excerpt::derive_excerpt;
pub use limits::EntityLimits;
pub use repository::SlugIndex;
pub use services::UniqueSlugService;
pub use slug::{SlugCandidates, SlugError, resolve_unique_slug, slugify};
pub use text::paragraphs;
pub use value_objects::{Content, Slug, Summary, Title};
