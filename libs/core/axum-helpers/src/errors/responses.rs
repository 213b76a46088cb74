//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "message": "Bad Request - all fields must be filled, except for is_published",
        "data": null,
        "error": true
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing or invalid Token header",
    content_type = "application/json",
    example = json!({
        "message": "Unauthorized - authorization header is missing",
        "data": null,
        "error": true
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "message": "Not Found - product not found",
        "data": null,
        "error": true
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "message": "Conflict - vehicle with this registration already exists",
        "data": null,
        "error": true
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "message": "Internal Server Error - no products found",
        "data": null,
        "error": true
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
