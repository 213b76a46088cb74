//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`auth`]**: `Token` header check against the configured shared secret
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: Request logging and security headers
//! - **[`errors`]**: `AppError` and the `{message, data, error}` envelope
//! - **[`extractors`]**: JSON and path extractors with enveloped rejections
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{TOKEN_HEADER, require_token, with_token_auth};

pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

pub use http::{request_logger, security_headers};

pub use errors::{ApiResponse, AppError, ErrorCode, ErrorResponse, error_response};

pub use extractors::{IdPath, JsonBody, ValidatedJson};
