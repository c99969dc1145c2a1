// src/application/dto/site.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Branding shown alongside public pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteProfile {
    pub brand_name: String,
    pub brand_domain: String,
    pub brand_tagline: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            brand_name: "Fixly.dev".into(),
            brand_domain: "fixly.dev".into(),
            brand_tagline: "SaaS builder for 400+ developer automations".into(),
        }
    }
}
