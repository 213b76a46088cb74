//! Custom extractors for Axum handlers.
//!
//! Each one turns its rejection into an [`AppError`](crate::AppError) so that
//! malformed requests get the same JSON envelope as every other failure.

pub mod id_path;
pub mod json_body;
pub mod validated_json;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
