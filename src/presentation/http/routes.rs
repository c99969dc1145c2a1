// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitQuota};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, public},
    middleware::rate_limit::admin_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router knobs that come from configuration rather than application state.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    /// Needs the server to run with connect info so the peer IP is known.
    pub rate_limit_enabled: bool,
    pub admin_rate_limit: RateLimitQuota,
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit_enabled: config.rate_limit_enabled(),
            admin_rate_limit: config.admin_rate_limit(),
        }
    }
}

/// Router with permissive CORS and no rate limiting.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let mut admin_routes = Router::new()
        .route(
            "/admin/tools",
            get(admin::list_tools).post(admin::create_tool),
        )
        .route("/admin/tools/{id}/toggle", post(admin::toggle_tool))
        .route(
            "/admin/posts",
            get(admin::list_posts).post(admin::create_post),
        )
        .route("/admin/posts/{id}/toggle", post(admin::toggle_post));

    if options.rate_limit_enabled {
        admin_routes = admin_routes.layer(admin_rate_limit_layer(options.admin_rate_limit));
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(public::home))
        .route("/tools/{slug}", get(public::get_tool))
        .route("/blog", get(public::list_posts))
        .route("/blog/{slug}", get(public::get_post))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
