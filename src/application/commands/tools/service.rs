// src/application/commands/tools/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        content::{EntityLimits, UniqueSlugService},
        tool::{ToolReadRepository, ToolWriteRepository},
    },
};

pub struct ToolCommandService {
    pub(super) write_repo: Arc<dyn ToolWriteRepository>,
    pub(super) read_repo: Arc<dyn ToolReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) limits: EntityLimits,
}

impl ToolCommandService {
    pub fn new(
        write_repo: Arc<dyn ToolWriteRepository>,
        read_repo: Arc<dyn ToolReadRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
        limits: EntityLimits,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            limits,
        }
    }
}
