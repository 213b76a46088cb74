use crate::errors::AppError;
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};
use core_config::auth::AuthConfig;

/// Header carrying the shared secret
pub const TOKEN_HEADER: &str = "token";

/// Rejects the request with `401` unless the `Token` header matches.
///
/// Runs before any handler logic, so a rejected request never reaches a service.
pub async fn require_token(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    match provided {
        None => {
            tracing::debug!("Request without Token header");
            Err(AppError::Unauthorized(
                "authorization header is missing".to_string(),
            ))
        }
        Some(token) if !auth.matches(token) => {
            tracing::debug!("Token header did not match");
            Err(AppError::Unauthorized("invalid token".to_string()))
        }
        Some(_) => Ok(next.run(request).await),
    }
}

/// Wraps every route of `router` with [`require_token`].
pub fn with_token_auth(router: Router, auth: AuthConfig) -> Router {
    router.layer(middleware::from_fn_with_state(auth, require_token))
}
