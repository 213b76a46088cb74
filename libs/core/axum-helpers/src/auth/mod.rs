//! Static shared-secret authentication.
//!
//! Every protected request must carry a `Token` header equal to the
//! configured [`AuthConfig`](core_config::auth::AuthConfig) value.
//!
//! ```ignore
//! use axum_helpers::auth::with_token_auth;
//! use core_config::{auth::AuthConfig, FromEnv};
//!
//! let protected = with_token_auth(api_routes, AuthConfig::from_env()?);
//! ```

pub mod middleware;

pub use middleware::{TOKEN_HEADER, require_token, with_token_auth};
