//! HTTP middleware module.
//!
//! - Request logging (method, URI, status, duration, response size)
//! - Security headers
//!
//! ```ignore
//! use axum_helpers::http::{request_logger, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(request_logger))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod logging;
pub mod security;

pub use logging::request_logger;
pub use security::security_headers;
