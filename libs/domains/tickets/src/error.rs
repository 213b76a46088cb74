use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("no tickets found")]
    NoRecords,

    /// `row` is 1-based
    #[error("invalid ticket at row {row}: {details}")]
    InvalidRow { row: usize, details: String },

    #[error("failed to read tickets: {0}")]
    Read(#[from] csv::Error),
}

pub type TicketResult<T> = Result<T, TicketError>;

impl From<TicketError> for AppError {
    fn from(err: TicketError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
