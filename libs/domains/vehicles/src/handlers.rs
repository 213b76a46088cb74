//! HTTP handlers for Vehicles API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, ConflictResponse, NotFoundResponse, UnauthorizedResponse,
    },
    ApiResponse, AppError, IdPath, JsonBody, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::VehicleResult;
use crate::filter::parse_range;
use crate::models::{
    AverageCapacity, AverageSpeed, DimensionsQuery, FuelUpdate, SpeedUpdate, Vehicle,
    VehicleInput, WeightQuery,
};
use crate::repository::VehicleRepository;
use crate::service::VehicleService;

pub const MESSAGE_CREATED: &str = "Vehicle created";
pub const MESSAGE_BATCH_CREATED: &str = "Vehicles created";
pub const MESSAGE_UPDATED: &str = "Vehicle updated";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_vehicles,
        create_vehicle,
        create_batch,
        by_color_and_year,
        by_brand_between,
        average_speed,
        average_capacity,
        by_fuel_type,
        by_transmission,
        by_dimensions,
        by_weight,
        update_speed,
        update_fuel,
        delete_vehicle,
    ),
    components(
        schemas(Vehicle, VehicleInput, SpeedUpdate, FuelUpdate, AverageSpeed, AverageCapacity),
        responses(BadRequestResponse, ConflictResponse, NotFoundResponse, UnauthorizedResponse)
    ),
    tags(
        (name = "Vehicles", description = "Vehicle catalog endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: VehicleRepository + 'static>(service: VehicleService<R>) -> Router {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/batch", post(create_batch))
        .route("/color/{color}/year/{year}", get(by_color_and_year))
        .route(
            "/brand/{brand}/between/{start_year}/{end_year}",
            get(by_brand_between),
        )
        .route("/average_speed/brand/{brand}", get(average_speed))
        .route("/average_capacity/brand/{brand}", get(average_capacity))
        .route("/fuel_type/{fuel_type}", get(by_fuel_type))
        .route("/transmission/{transmission}", get(by_transmission))
        .route("/dimensions", get(by_dimensions))
        .route("/weight", get(by_weight))
        .route(
            "/{id}/update_speed",
            put(update_speed).patch(update_speed),
        )
        .route(
            "/{id}/update_fuel",
            put(update_fuel).patch(update_fuel),
        )
        .route("/{id}", delete(delete_vehicle))
        .with_state(Arc::new(service))
}

fn parse_year(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest("fabrication year must be a valid integer".to_string()))
}

fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<f64>, AppError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::BadRequest(format!("invalid {name} weight format")))
    })
    .transpose()
}

fn parse_dimension(raw: Option<&str>, name: &str) -> Result<Option<(f64, f64)>, AppError> {
    raw.map(|value| {
        parse_range(value)
            .ok_or_else(|| AppError::BadRequest(format!("invalid {name} range, expected min-max")))
    })
    .transpose()
}

/// List every vehicle
#[utoipa::path(
    get,
    path = "",
    tag = "Vehicles",
    responses(
        (status = 200, description = "All vehicles, ordered by id", body = Vec<Vehicle>),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn list_vehicles<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
) -> VehicleResult<Json<Vec<Vehicle>>> {
    Ok(Json(service.list_vehicles().await?))
}

/// Register a vehicle
#[utoipa::path(
    post,
    path = "",
    tag = "Vehicles",
    request_body = VehicleInput,
    responses(
        (status = 201, description = "Vehicle created", body = ApiResponse<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn create_vehicle<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    JsonBody(input): JsonBody<VehicleInput>,
) -> VehicleResult<impl IntoResponse> {
    let vehicle = service.create_vehicle(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MESSAGE_CREATED, vehicle)),
    ))
}

/// Register several vehicles at once; nothing is stored if any fails
#[utoipa::path(
    post,
    path = "/batch",
    tag = "Vehicles",
    request_body = Vec<VehicleInput>,
    responses(
        (status = 201, description = "Vehicles created", body = ApiResponse<Vec<Vehicle>>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn create_batch<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    JsonBody(inputs): JsonBody<Vec<VehicleInput>>,
) -> VehicleResult<impl IntoResponse> {
    let vehicles = service.create_batch(inputs).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MESSAGE_BATCH_CREATED, vehicles)),
    ))
}

/// Vehicles of a color built in a given year
#[utoipa::path(
    get,
    path = "/color/{color}/year/{year}",
    tag = "Vehicles",
    params(
        ("color" = String, Path, description = "Color, case-insensitive"),
        ("year" = i32, Path, description = "Fabrication year")
    ),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_color_and_year<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path((color, year)): Path<(String, String)>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let year = parse_year(&year)?;
    Ok(Json(service.find_by_color_and_year(&color, year).await?))
}

/// Vehicles of a brand built between two years, inclusive
#[utoipa::path(
    get,
    path = "/brand/{brand}/between/{start_year}/{end_year}",
    tag = "Vehicles",
    params(
        ("brand" = String, Path, description = "Brand, case-insensitive"),
        ("start_year" = i32, Path, description = "First year"),
        ("end_year" = i32, Path, description = "Last year")
    ),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_brand_between<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let start_year = parse_year(&start_year)?;
    let end_year = parse_year(&end_year)?;
    Ok(Json(
        service
            .find_by_brand_between(&brand, start_year, end_year)
            .await?,
    ))
}

/// Mean maximum speed of a brand
#[utoipa::path(
    get,
    path = "/average_speed/brand/{brand}",
    tag = "Vehicles",
    params(("brand" = String, Path, description = "Brand, case-insensitive")),
    responses(
        (status = 200, description = "Average speed", body = AverageSpeed),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn average_speed<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path(brand): Path<String>,
) -> VehicleResult<Json<AverageSpeed>> {
    Ok(Json(service.average_speed_by_brand(&brand).await?))
}

/// Mean passenger capacity of a brand
#[utoipa::path(
    get,
    path = "/average_capacity/brand/{brand}",
    tag = "Vehicles",
    params(("brand" = String, Path, description = "Brand, case-insensitive")),
    responses(
        (status = 200, description = "Average capacity", body = AverageCapacity),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn average_capacity<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path(brand): Path<String>,
) -> VehicleResult<Json<AverageCapacity>> {
    Ok(Json(service.average_capacity_by_brand(&brand).await?))
}

#[utoipa::path(
    get,
    path = "/fuel_type/{fuel_type}",
    tag = "Vehicles",
    params(("fuel_type" = String, Path, description = "Fuel type, case-insensitive")),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_fuel_type<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path(fuel_type): Path<String>,
) -> VehicleResult<Json<Vec<Vehicle>>> {
    Ok(Json(service.find_by_fuel_type(&fuel_type).await?))
}

#[utoipa::path(
    get,
    path = "/transmission/{transmission}",
    tag = "Vehicles",
    params(("transmission" = String, Path, description = "Transmission, case-insensitive")),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_transmission<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Path(transmission): Path<String>,
) -> VehicleResult<Json<Vec<Vehicle>>> {
    Ok(Json(service.find_by_transmission(&transmission).await?))
}

/// Vehicles within length and width ranges
///
/// An omitted range does not constrain that dimension.
#[utoipa::path(
    get,
    path = "/dimensions",
    tag = "Vehicles",
    params(DimensionsQuery),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_dimensions<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Query(query): Query<DimensionsQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let length = parse_dimension(query.length.as_deref(), "length")?;
    let width = parse_dimension(query.width.as_deref(), "width")?;
    Ok(Json(service.find_by_dimensions(length, width).await?))
}

/// Vehicles within a weight range
#[utoipa::path(
    get,
    path = "/weight",
    tag = "Vehicles",
    params(WeightQuery),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn by_weight<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    Query(query): Query<WeightQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let min = parse_bound(query.min.as_deref(), "minimum")?;
    let max = parse_bound(query.max.as_deref(), "maximum")?;
    Ok(Json(service.find_by_weight(min, max).await?))
}

#[utoipa::path(
    put,
    path = "/{id}/update_speed",
    tag = "Vehicles",
    params(("id" = u32, Path, description = "Vehicle ID")),
    request_body = SpeedUpdate,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_speed<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<SpeedUpdate>,
) -> VehicleResult<impl IntoResponse> {
    let vehicle = service.update_speed(id, body.max_speed).await?;
    Ok(Json(ApiResponse::success(MESSAGE_UPDATED, vehicle)))
}

#[utoipa::path(
    put,
    path = "/{id}/update_fuel",
    tag = "Vehicles",
    params(("id" = u32, Path, description = "Vehicle ID")),
    request_body = FuelUpdate,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<Vehicle>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_fuel<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<FuelUpdate>,
) -> VehicleResult<impl IntoResponse> {
    let vehicle = service.update_fuel(id, &body.fuel_type).await?;
    Ok(Json(ApiResponse::success(MESSAGE_UPDATED, vehicle)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Vehicles",
    params(("id" = u32, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_vehicle<R: VehicleRepository>(
    State(service): State<Arc<VehicleService<R>>>,
    IdPath(id): IdPath,
) -> VehicleResult<StatusCode> {
    service.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
