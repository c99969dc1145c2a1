// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, tools::ToolCommandService},
        ports::{ClockPort, SlugGeneratorPort},
        queries::{home::HomeQueryService, posts::PostQueryService, tools::ToolQueryService},
    },
    domain::{
        content::{EntityLimits, UniqueSlugService},
        post::{PostReadRepository, PostWriteRepository},
        tool::{ToolReadRepository, ToolWriteRepository},
    },
};

pub struct ApplicationServices {
    pub tool_commands: Arc<ToolCommandService>,
    pub tool_queries: Arc<ToolQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub home_queries: Arc<HomeQueryService>,
}

impl ApplicationServices {
    pub fn new(
        tool_write_repo: Arc<dyn ToolWriteRepository>,
        tool_read_repo: Arc<dyn ToolReadRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let tool_commands = Arc::new(ToolCommandService::new(
            tool_write_repo,
            Arc::clone(&tool_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            EntityLimits::TOOL,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            post_write_repo,
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            EntityLimits::POST,
        ));

        let tool_queries = Arc::new(ToolQueryService::new(Arc::clone(&tool_read_repo)));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));
        let home_queries = Arc::new(HomeQueryService::new(
            tool_read_repo,
            post_read_repo,
            clock,
        ));

        Self {
            tool_commands,
            tool_queries,
            post_commands,
            post_queries,
            home_queries,
        }
    }
}
