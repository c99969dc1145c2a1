// src/application/dto/mod.rs
pub mod home;
pub mod posts;
pub mod serde_time;
pub mod site;
pub mod tools;

pub use home::HomeDto;
pub use posts::{PostDetailDto, PostDto};
pub use site::SiteProfile;
pub use tools::{ToolDetailDto, ToolDto};
