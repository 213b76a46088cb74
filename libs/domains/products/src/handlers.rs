//! HTTP handlers for Products API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    ApiResponse, AppError, JsonBody,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    ConsumerPriceQuery, PriceQuery, Product, ProductInput, ProductPatch, TotalPrice, Upserted,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const MESSAGE_CREATED: &str = "Product created";
pub const MESSAGE_UPDATED: &str = "Product updated";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        upsert_product,
        patch_product,
        delete_product,
        search_products,
        consumer_price,
    ),
    components(
        schemas(Product, ProductInput, ProductPatch, TotalPrice),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/consumer_price", get(consumer_price))
        .route(
            "/{id}",
            get(get_product)
                .put(upsert_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MESSAGE_CREATED, product)),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Replace a product, creating a new one when the id is unknown
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 201, description = "Product created under a new id", body = ApiResponse<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn upsert_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let response = match service.upsert_product(&id, input).await? {
        Upserted::Updated(product) => (
            StatusCode::OK,
            Json(ApiResponse::success(MESSAGE_UPDATED, product)),
        ),
        Upserted::Created(product) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(MESSAGE_CREATED, product)),
        ),
    };
    Ok(response)
}

/// Update some fields of a product
///
/// Keys with an unexpected JSON type, or that are not product fields, are ignored.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> ProductResult<impl IntoResponse> {
    let product = service
        .patch_product(&id, ProductPatch::from_fields(&fields))
        .await?;
    Ok(Json(ApiResponse::success(MESSAGE_UPDATED, product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Products priced strictly above `price`
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(PriceQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let threshold = query
        .price
        .as_deref()
        .map(str::trim)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|price| price.is_finite())
        .ok_or_else(|| AppError::BadRequest("invalid price format".to_string()))?;

    let products = service.search_by_price(threshold).await?;
    Ok(Json(products))
}

/// Taxed total for a list of product ids
///
/// Without `list` the whole catalog is priced.
#[utoipa::path(
    get,
    path = "/consumer_price",
    tag = "Products",
    params(ConsumerPriceQuery),
    responses(
        (status = 200, description = "Priced products", body = TotalPrice),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn consumer_price<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ConsumerPriceQuery>,
) -> ProductResult<Json<TotalPrice>> {
    let total = service.total_price(&query.ids()).await?;
    Ok(Json(total))
}
