// src/config.rs
use crate::application::dto::SiteProfile;
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    database_max_connections: u32,
    admin_token: Option<String>,
    rate_limit_enabled: bool,
    admin_rate_limit: RateLimitQuota,
    allowed_origins: Vec<String>,
    site: SiteProfile,
}

/// Per-client token bucket: `burst_size` requests up front, then one more
/// every `replenish_every_ms` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitQuota {
    burst_size: u32,
    replenish_every_ms: u64,
}

impl RateLimitQuota {
    pub fn new(burst_size: u32, replenish_every_ms: u64) -> Result<Self, ConfigError> {
        if burst_size == 0 || replenish_every_ms == 0 {
            return Err(ConfigError::Invalid(
                "rate limit burst size and replenish interval must be greater than zero".into(),
            ));
        }
        Ok(Self {
            burst_size,
            replenish_every_ms,
        })
    }

    pub const fn burst_size(&self) -> u32 {
        self.burst_size
    }

    pub const fn replenish_every_ms(&self) -> u64 {
        self.replenish_every_ms
    }
}

impl Default for RateLimitQuota {
    /// Ten requests at once, two per second sustained.
    fn default() -> Self {
        Self {
            burst_size: 10,
            replenish_every_ms: 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://fixly.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got `{raw}`"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = var("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => default_max_connections(),
        };

        let admin_token = var("ADMIN_TOKEN");
        let rate_limit_enabled = var("RATE_LIMIT_ENABLED").is_none_or(|v| parse_flag(&v));

        let default_quota = RateLimitQuota::default();
        let admin_rate_limit = RateLimitQuota::new(
            match var("ADMIN_RATE_LIMIT_BURST") {
                Some(raw) => parse_positive("ADMIN_RATE_LIMIT_BURST", &raw)?,
                None => default_quota.burst_size(),
            },
            match var("ADMIN_RATE_LIMIT_REPLENISH_MS") {
                Some(raw) => parse_positive("ADMIN_RATE_LIMIT_REPLENISH_MS", &raw)?,
                None => default_quota.replenish_every_ms(),
            },
        )?;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let defaults = SiteProfile::default();
        let site = SiteProfile {
            brand_name: var("BRAND_NAME").unwrap_or(defaults.brand_name),
            brand_domain: var("BRAND_DOMAIN").unwrap_or(defaults.brand_domain),
            brand_tagline: var("BRAND_TAGLINE").unwrap_or(defaults.brand_tagline),
        };

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
            admin_token,
            rate_limit_enabled,
            admin_rate_limit,
            allowed_origins,
            site,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Bearer token guarding the admin routes; `None` leaves them open.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub const fn admin_rate_limit(&self) -> RateLimitQuota {
        self.admin_rate_limit
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn site(&self) -> &SiteProfile {
        &self.site
    }
}
