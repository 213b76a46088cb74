//! Vehicles API routes

use axum::Router;
use domain_vehicles::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.vehicles.clone())
}
