// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        content::{EntityLimits, UniqueSlugService},
        post::{PostReadRepository, PostWriteRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) limits: EntityLimits,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
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
