use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("vehicle not found: {0}")]
    NotFound(u32),

    #[error("no vehicles found with the given criteria")]
    NoMatches,

    #[error("{0}")]
    Validation(String),

    #[error("vehicle with this registration already exists")]
    DuplicateRegistration(String),

    #[error("failed to load vehicles: {0}")]
    Seed(String),

    #[error("no vehicle ids left")]
    IdsExhausted,
}

pub type VehicleResult<T> = Result<T, VehicleError>;

impl VehicleError {
    pub fn validation(message: impl Into<String>) -> Self {
        VehicleError::Validation(message.into())
    }
}

impl From<std::io::Error> for VehicleError {
    fn from(err: std::io::Error) -> Self {
        VehicleError::Seed(err.to_string())
    }
}

impl From<serde_json::Error> for VehicleError {
    fn from(err: serde_json::Error) -> Self {
        VehicleError::Seed(err.to_string())
    }
}

impl From<VehicleError> for AppError {
    fn from(err: VehicleError) -> Self {
        let message = err.to_string();
        match err {
            VehicleError::NotFound(_) | VehicleError::NoMatches => AppError::NotFound(message),
            VehicleError::Validation(_) => AppError::BadRequest(message),
            VehicleError::DuplicateRegistration(_) => AppError::Conflict(message),
            VehicleError::Seed(_) | VehicleError::IdsExhausted => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for VehicleError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
