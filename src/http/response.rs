//! Error responses.
//!
//! Authentication failures render as `401 Unauthorized` with a JSON body
//! and a `WWW-Authenticate: ApiKey` challenge.

use axum::{
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::{AuthError, API_KEY_SCHEME};

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, API_KEY_SCHEME)],
            Json(body),
        )
            .into_response()
    }
}
