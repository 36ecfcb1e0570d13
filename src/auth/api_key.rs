//! API key extraction from the `Authorization` header.
//!
//! # Responsibilities
//! - Read the first `Authorization` value from a header map
//! - Split it into scheme and token on the first space
//! - Accept only the `ApiKey` scheme (case-sensitive)
//!
//! # Design Decisions
//! - Pure functions: no logging, no allocation on the success path
//! - Errors are a closed enum compared structurally, not by message
//! - The token is returned verbatim; `"ApiKey  abc"` yields `" abc"`

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

/// Scheme expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Reasons an API key could not be read from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header present but not of the form `ApiKey <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// Only the first `Authorization` value is consulted. The header name is
/// matched case-insensitively, the scheme is not.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::NoAuthHeader)?;
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let raw = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    parse_authorization(raw)
}

/// Parse an already-read `Authorization` value.
pub fn parse_authorization(value: &str) -> Result<&str, AuthError> {
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if scheme != API_KEY_SCHEME || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

/// Format a key as an `Authorization` header value.
pub fn authorization_value(key: &str) -> String {
    format!("{} {}", API_KEY_SCHEME, key)
}

/// An API key taken from a request.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Extract and take ownership of the key in `headers`.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        get_api_key(headers).map(Self::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short hint safe to log or echo back: first 4 chars and an ellipsis.
    pub fn redacted(&self) -> String {
        match self.0.char_indices().nth(4) {
            Some((idx, _)) => format!("{}...", &self.0[..idx]),
            None => "***".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}
