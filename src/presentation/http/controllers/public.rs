// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{HomeDto, PostDetailDto, PostDto, SiteProfile, ToolDetailDto},
    queries::{
        posts::{GetPostBySlugQuery, ListPostsQuery},
        tools::GetToolBySlugQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything the landing page shows.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub site: SiteProfile,
    #[serde(flatten)]
    pub home: HomeDto,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Published tools, the latest posts and site branding.", body = HomeResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Public"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomeResponse>> {
    let home = state.services.home_queries.home().await.into_http()?;

    Ok(Json(HomeResponse {
        site: state.site.as_ref().clone(),
        home,
    }))
}

#[utoipa::path(
    get,
    path = "/tools/{slug}",
    params(("slug" = String, Path, description = "Tool slug")),
    responses(
        (status = 200, description = "A published tool.", body = ToolDetailDto),
        (status = 404, description = "No published tool has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Public"
)]
pub async fn get_tool(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ToolDetailDto>> {
    state
        .services
        .tool_queries
        .get_published_tool(GetToolBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blog",
    responses(
        (status = 200, description = "Published posts, newest first.", body = [PostDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Public"
)]
pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery::default())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blog/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "A published post.", body = PostDetailDto),
        (status = 404, description = "No published post has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Public"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDetailDto>> {
    state
        .services
        .post_queries
        .get_published_post(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
