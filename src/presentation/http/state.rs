// src/presentation/http/state.rs
use crate::application::{dto::SiteProfile, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub site: Arc<SiteProfile>,
    /// When set, admin routes require this bearer token.
    pub admin_token: Option<Arc<str>>,
}
