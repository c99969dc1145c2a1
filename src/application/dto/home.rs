// src/application/dto/home.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PostDto, ToolDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub tools: Vec<ToolDto>,
    pub posts: Vec<PostDto>,
    pub current_year: i32,
}
