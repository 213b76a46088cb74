//! Tickets API routes

use axum::Router;
use domain_tickets::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.tickets.clone())
}
