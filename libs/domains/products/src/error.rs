use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Business-rule violations detected before anything is persisted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields must be filled, except for is_published")]
    MissingFields,

    #[error("the code_value must be unique")]
    DuplicateCodeValue,

    #[error("invalid date. The format must be DD/MM/YYYY")]
    InvalidDate,
}

#[derive(Debug, Error)]
pub enum ProductError {
    /// Carries the requested id
    #[error("product not found")]
    NotFound(String),

    #[error("product already exists: {0}")]
    AlreadyExists(String),

    #[error("no products found")]
    NoRecords,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not enough stock for product ID:{0}")]
    InsufficientStock(String),

    #[error("no products available")]
    NoProductsAvailable,

    #[error("storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<std::io::Error> for ProductError {
    fn from(err: std::io::Error) -> Self {
        ProductError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ProductError {
    fn from(err: serde_json::Error) -> Self {
        ProductError::Storage(err.to_string())
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::NotFound(message)
            }
            ProductError::AlreadyExists(_) => AppError::Conflict(message),
            ProductError::NoRecords | ProductError::Storage(_) => {
                AppError::InternalServerError(message)
            }
            ProductError::Validation(_)
            | ProductError::InsufficientStock(_)
            | ProductError::NoProductsAvailable => AppError::BadRequest(message),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
