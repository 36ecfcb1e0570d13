//! API key authentication.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → middleware.rs (require header, store ApiKey in extensions)
//!     → api_key.rs (split "ApiKey <token>", classify failures)
//!     → extract.rs (handlers receive ApiKey as an argument)
//! ```
//!
//! Mapping a key to an identity is left to the caller.

pub mod api_key;
pub mod extract;
pub mod middleware;

pub use api_key::{authorization_value, get_api_key, parse_authorization, ApiKey, AuthError, API_KEY_SCHEME};
pub use middleware::{api_key_middleware, AuthState};
