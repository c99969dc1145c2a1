// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use fixly_core::application::{
    dto::SiteProfile,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use fixly_core::domain::{
    post::{PostReadRepository, PostWriteRepository},
    tool::{ToolReadRepository, ToolWriteRepository},
};
use fixly_core::infrastructure::{
    database,
    repositories::{
        SqlitePostReadRepository, SqlitePostWriteRepository, SqliteToolReadRepository,
        SqliteToolWriteRepository,
    },
    util::DefaultSlugGenerator,
};
use fixly_core::config::RateLimitQuota;
use fixly_core::presentation::http::{
    routes::{RouterOptions, build_router, build_router_with_options},
    state::HttpState,
};
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Services wired to in-memory stores, with handles to the stores.
pub struct InMemoryServices {
    pub services: Arc<ApplicationServices>,
    pub tools: Arc<mocks::InMemoryToolStore>,
    pub posts: Arc<mocks::InMemoryPostStore>,
}

pub fn in_memory_services() -> InMemoryServices {
    let tools = Arc::new(mocks::InMemoryToolStore::new());
    let posts = Arc::new(mocks::InMemoryPostStore::new());

    let tool_write: Arc<dyn ToolWriteRepository> = tools.clone();
    let tool_read: Arc<dyn ToolReadRepository> = tools.clone();
    let post_write: Arc<dyn PostWriteRepository> = posts.clone();
    let post_read: Arc<dyn PostReadRepository> = posts.clone();
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        tool_write, tool_read, post_write, post_read, clock, slugger,
    ));

    InMemoryServices {
        services,
        tools,
        posts,
    }
}

/// A fresh in-memory SQLite database with the schema applied. A single
/// connection keeps every query on the same database.
pub async fn sqlite_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    Arc::new(pool)
}

pub async fn sqlite_services() -> Arc<ApplicationServices> {
    let pool = sqlite_pool().await;

    let tool_write: Arc<dyn ToolWriteRepository> =
        Arc::new(SqliteToolWriteRepository::new(Arc::clone(&pool)));
    let tool_read: Arc<dyn ToolReadRepository> =
        Arc::new(SqliteToolReadRepository::new(Arc::clone(&pool)));
    let post_write: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool)));
    let post_read: Arc<dyn PostReadRepository> =
        Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        tool_write, tool_read, post_write, post_read, clock, slugger,
    ))
}

pub fn state_for(services: Arc<ApplicationServices>, admin_token: Option<&str>) -> HttpState {
    HttpState {
        services,
        site: Arc::new(SiteProfile::default()),
        admin_token: admin_token.map(Arc::from),
    }
}

/// Router over in-memory stores with open admin routes.
pub fn make_test_router() -> (axum::Router, InMemoryServices) {
    let wired = in_memory_services();
    let router = build_router(state_for(Arc::clone(&wired.services), None));
    (router, wired)
}

/// Router over in-memory stores whose admin routes require [`ADMIN_TOKEN`].
pub fn make_guarded_router() -> (axum::Router, InMemoryServices) {
    let wired = in_memory_services();
    let router = build_router(state_for(Arc::clone(&wired.services), Some(ADMIN_TOKEN)));
    (router, wired)
}

/// Router over in-memory stores with open admin routes behind the per-IP
/// limiter.
pub fn make_rate_limited_router(quota: RateLimitQuota) -> (axum::Router, InMemoryServices) {
    let wired = in_memory_services();
    let options = RouterOptions {
        rate_limit_enabled: true,
        admin_rate_limit: quota,
        ..RouterOptions::default()
    };
    let router = build_router_with_options(state_for(Arc::clone(&wired.services), None), &options);
    (router, wired)
}

/// GET as forwarded by a proxy for `client_ip`.
pub fn get_from(uri: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_empty(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// URL-encoded form submission, as a browser would send it.
pub fn post_form<T: Serialize>(uri: &str, form: &T, token: Option<&str>) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(form).expect("encode form");
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(encoded)).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
