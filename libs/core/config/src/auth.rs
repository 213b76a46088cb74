//! Shared-secret configuration for the `Token` request header.

use crate::{env_required, ConfigError, FromEnv};
use std::fmt;

/// Expected value of the `Token` header.
///
/// Loaded from the `TOKEN` environment variable (required, non-blank).
/// The value never appears in `Debug` output.
///
/// # Example
///
/// ```ignore
/// use core_config::{auth::AuthConfig, FromEnv};
///
/// let auth = AuthConfig::from_env()?;
/// assert!(auth.matches("secret"));
/// ```
#[derive(Clone)]
pub struct AuthConfig {
    token: String,
}

impl AuthConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Compares `candidate` with the configured token without short-circuiting
    /// on the first differing byte.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.token.as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let token = env_required("TOKEN")?;
        if token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("TOKEN".to_string()));
        }
        Ok(Self::new(token))
    }
}
