//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (request ID, span)
//!     → server.rs (router, timeout)
//!     → auth::middleware (protected routes only)
//!     → handlers.rs
//!     → response.rs (AuthError → 401)
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, HttpServer};
