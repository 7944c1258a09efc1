//! Caller identity extraction from gateway-forwarded claim headers.
//!
//! Token validation happens upstream; the gateway verifies the bearer token
//! and forwards the claims as plain headers. A request without usable
//! claims is unauthorized, not malformed.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::AppError;
use crate::models::Identity;

/// Header carrying the caller's privilege claim.
pub const PRIVILEGE_HEADER: &str = "x-privilege";

/// Header carrying the caller's assigned station claim.
pub const STATION_HEADER: &str = "x-station-id";

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let privilege = parts
            .headers
            .get(PRIVILEGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i32>().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("missing or invalid privilege claim".to_string())
            })?;

        let station_id = parts
            .headers
            .get(STATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if privilege != 0 && station_id.is_none() {
            return Err(AppError::Unauthorized(
                "station claim required for restricted callers".to_string(),
            ));
        }

        Ok(Identity {
            privilege,
            station_id,
        })
    }
}
