// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::public::home,
        crate::presentation::http::controllers::public::get_tool,
        crate::presentation::http::controllers::public::list_posts,
        crate::presentation::http::controllers::public::get_post,
        crate::presentation::http::controllers::admin::list_tools,
        crate::presentation::http::controllers::admin::create_tool,
        crate::presentation::http::controllers::admin::toggle_tool,
        crate::presentation::http::controllers::admin::list_posts,
        crate::presentation::http::controllers::admin::create_post,
        crate::presentation::http::controllers::admin::toggle_post,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::public::HomeResponse,
            crate::presentation::http::controllers::admin::ToolForm,
            crate::presentation::http::controllers::admin::PostForm,
            crate::presentation::http::controllers::admin::ToolNoticeResponse,
            crate::presentation::http::controllers::admin::PostNoticeResponse,
            crate::application::dto::SiteProfile,
            crate::application::dto::HomeDto,
            crate::application::dto::ToolDto,
            crate::application::dto::ToolDetailDto,
            crate::application::dto::PostDto,
            crate::application::dto::PostDetailDto
        )
    ),
    tags(
        (name = "Public", description = "Published tools and blog posts"),
        (name = "Admin", description = "Creating entries and toggling their visibility"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Fixly.dev content API",
        description = "Tool catalog and blog behind the Fixly.dev site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "adminToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
