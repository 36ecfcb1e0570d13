//! API key authentication for HTTP services.
//!
//! The core is [`auth::get_api_key`], which reads `Authorization: ApiKey <token>`
//! from a header map. Around it sit an axum middleware and extractor, and a
//! small server used by the `apikey-auth` binary.

pub mod auth;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use auth::{get_api_key, ApiKey, AuthError};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
