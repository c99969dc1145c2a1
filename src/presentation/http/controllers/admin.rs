// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        posts::{CreatePostCommand, TogglePostCommand},
        tools::{CreateToolCommand, ToggleToolCommand},
    },
    dto::{PostDto, ToolDto},
    queries::{posts::ListPostsQuery, tools::ListToolsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAccess;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Missing fields deserialize as empty strings so they surface as
// validation messages rather than a form rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ToolForm {
    pub title: String,
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    /// Left blank, the excerpt is cut from the content.
    pub excerpt: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ToolNoticeResponse {
    pub notice: String,
    pub tool: ToolDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostNoticeResponse {
    pub notice: String,
    pub post: PostDto,
}

fn visibility_notice(title: &str, published: bool) -> String {
    let state = if published { "published" } else { "hidden" };
    format!("“{title}” is now {state}.")
}

#[utoipa::path(
    get,
    path = "/admin/tools",
    responses(
        (status = 200, description = "Every tool, hidden ones included, newest first.", body = [ToolDto]),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list_tools(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Json<Vec<ToolDto>>> {
    state
        .services
        .tool_queries
        .list_tools(ListToolsQuery {
            include_hidden: true,
            limit: None,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/tools",
    request_body(content = ToolForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Tool created and published.", body = ToolNoticeResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Form rejected; messages and the submitted input are returned.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn create_tool(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Form(form): Form<ToolForm>,
) -> HttpResult<(StatusCode, Json<ToolNoticeResponse>)> {
    let command = CreateToolCommand {
        title: form.title.clone(),
        summary: form.summary.clone(),
        content: form.content.clone(),
    };

    let tool = state
        .services
        .tool_commands
        .create_tool(command)
        .await
        .map_err(|err| HttpError::from_error(err).with_input(&form))?;

    let notice = format!(
        "“{}” is live on the {} homepage.",
        tool.title, state.site.brand_name
    );
    Ok((StatusCode::CREATED, Json(ToolNoticeResponse { notice, tool })))
}

#[utoipa::path(
    post,
    path = "/admin/tools/{id}/toggle",
    params(("id" = i64, Path, description = "Tool identifier")),
    responses(
        (status = 200, description = "Visibility flipped.", body = ToolNoticeResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown tool.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn toggle_tool(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<i64>,
) -> HttpResult<Json<ToolNoticeResponse>> {
    let tool = state
        .services
        .tool_commands
        .toggle_tool(ToggleToolCommand { id })
        .await
        .into_http()?;

    Ok(Json(ToolNoticeResponse {
        notice: visibility_notice(&tool.title, tool.published),
        tool,
    }))
}

#[utoipa::path(
    get,
    path = "/admin/posts",
    responses(
        (status = 200, description = "Every post, hidden ones included, newest first.", body = [PostDto]),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            include_hidden: true,
            limit: None,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/posts",
    request_body(content = PostForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Post created and published.", body = PostNoticeResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Form rejected; messages and the submitted input are returned.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Form(form): Form<PostForm>,
) -> HttpResult<(StatusCode, Json<PostNoticeResponse>)> {
    let command = CreatePostCommand {
        title: form.title.clone(),
        excerpt: form.excerpt.clone(),
        content: form.content.clone(),
    };

    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .map_err(|err| HttpError::from_error(err).with_input(&form))?;

    let notice = format!(
        "Blog post “{}” is live on {}.",
        post.title, state.site.brand_name
    );
    Ok((StatusCode::CREATED, Json(PostNoticeResponse { notice, post })))
}

#[utoipa::path(
    post,
    path = "/admin/posts/{id}/toggle",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Visibility flipped.", body = PostNoticeResponse),
        (status = 401, description = "Missing or wrong admin token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminToken" = [])),
    tag = "Admin"
)]
pub async fn toggle_post(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostNoticeResponse>> {
    let post = state
        .services
        .post_commands
        .toggle_post(TogglePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(PostNoticeResponse {
        notice: visibility_notice(&post.title, post.published),
        post,
    }))
}
