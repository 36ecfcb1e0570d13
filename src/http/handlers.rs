//! Route handlers.

use axum::Json;
use serde::Serialize;

use crate::auth::{ApiKey, AuthError};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Identity echo. Never returns the key itself.
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_hint: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// With auth disabled the middleware lets keyless requests through, so the
/// key is optional here.
pub async fn whoami(key: Result<ApiKey, AuthError>) -> Json<WhoamiResponse> {
    let response = match key {
        Ok(key) => WhoamiResponse {
            authenticated: true,
            key_length: Some(key.len()),
            key_hint: Some(key.redacted()),
        },
        Err(_) => WhoamiResponse {
            authenticated: false,
            key_length: None,
            key_hint: None,
        },
    };
    Json(response)
}
