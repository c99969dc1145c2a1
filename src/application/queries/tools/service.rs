// src/application/queries/tools/service.rs
use std::sync::Arc;

use crate::domain::tool::ToolReadRepository;

pub struct ToolQueryService {
    pub(super) read_repo: Arc<dyn ToolReadRepository>,
}

impl ToolQueryService {
    pub fn new(read_repo: Arc<dyn ToolReadRepository>) -> Self {
        Self { read_repo }
    }
}
