//! Middleware requiring `Authorization: ApiKey <token>` on a router.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::auth::api_key::{ApiKey, AuthError};

/// State required by [`api_key_middleware`].
#[derive(Clone, Debug)]
pub struct AuthState {
    /// When false, requests pass through without a key.
    pub enabled: bool,
}

pub async fn api_key_middleware(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    if !state.enabled {
        return Ok(next.run(request).await);
    }

    match ApiKey::from_headers(request.headers()) {
        Ok(key) => {
            tracing::debug!(
                path = %request.uri().path(),
                key = %key.redacted(),
                "API key accepted"
            );
            request.extensions_mut().insert(key);
            Ok(next.run(request).await)
        }
        Err(err) => {
            tracing::warn!(
                path = %request.uri().path(),
                error = %err,
                "Rejected request without a usable API key"
            );
            Err(err)
        }
    }
}
