// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitQuota;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AdminRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-IP limiter for the admin routes. Keys come from forwarding headers
/// when present, else the peer address, so the server must be run with
/// connect info. Each call owns a fresh bucket store.
pub fn admin_rate_limit_layer(quota: RateLimitQuota) -> AdminRateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(quota.replenish_every_ms());
    builder.burst_size(quota.burst_size());
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("RateLimitQuota is non-zero");

    tracing::debug!(
        burst_size = quota.burst_size(),
        replenish_every_ms = quota.replenish_every_ms(),
        "admin rate limiting enabled"
    );
    GovernorLayer::new(config)
}
