// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Gate for admin handlers. Passes every request when no admin token is
/// configured; otherwise the request must carry it as a bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let Some(expected) = app_state.admin_token.as_deref() else {
            return Ok(Self);
        };

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        if tokens_match(header.token(), expected) {
            Ok(Self)
        } else {
            Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )))
        }
    }
}

// Compares every byte so timing does not reveal the matching prefix length.
fn tokens_match(presented: &str, expected: &str) -> bool {
    let (presented, expected) = (presented.as_bytes(), expected.as_bytes());
    presented.len() == expected.len()
        && presented
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
