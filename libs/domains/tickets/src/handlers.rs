//! HTTP handlers for Tickets API

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{InternalServerErrorResponse, UnauthorizedResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TicketResult;
use crate::models::{CountryShare, CountryTickets, Ticket, TicketTotal};
use crate::repository::TicketRepository;
use crate::service::TicketService;

#[derive(OpenApi)]
#[openapi(
    paths(total_tickets, tickets_by_country, country_share),
    components(
        schemas(Ticket, TicketTotal, CountryTickets, CountryShare),
        responses(InternalServerErrorResponse, UnauthorizedResponse)
    ),
    tags(
        (name = "Tickets", description = "Ticket statistics")
    )
)]
pub struct ApiDoc;

pub fn router<R: TicketRepository + 'static>(service: TicketService<R>) -> Router {
    Router::new()
        .route("/", get(total_tickets))
        .route("/getByCountry/{dest}", get(tickets_by_country))
        .route("/getAverage/{dest}", get(country_share))
        .with_state(Arc::new(service))
}

/// Number of tickets sold
#[utoipa::path(
    get,
    path = "",
    tag = "Tickets",
    responses(
        (status = 200, description = "Ticket count", body = TicketTotal),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn total_tickets<R: TicketRepository>(
    State(service): State<Arc<TicketService<R>>>,
) -> TicketResult<Json<TicketTotal>> {
    let total = service.total().await?;
    Ok(Json(TicketTotal { total }))
}

/// Tickets sold for a destination
#[utoipa::path(
    get,
    path = "/getByCountry/{dest}",
    tag = "Tickets",
    params(("dest" = String, Path, description = "Destination country, case-insensitive")),
    responses(
        (status = 200, description = "Tickets for the destination", body = CountryTickets),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn tickets_by_country<R: TicketRepository>(
    State(service): State<Arc<TicketService<R>>>,
    Path(dest): Path<String>,
) -> TicketResult<Json<CountryTickets>> {
    let tickets = service.by_country(&dest).await?;
    Ok(Json(CountryTickets {
        country: dest,
        total: tickets.len(),
        tickets,
    }))
}

/// Share of all tickets going to a destination, in percent
#[utoipa::path(
    get,
    path = "/getAverage/{dest}",
    tag = "Tickets",
    params(("dest" = String, Path, description = "Destination country, case-insensitive")),
    responses(
        (status = 200, description = "Destination share", body = CountryShare),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn country_share<R: TicketRepository>(
    State(service): State<Arc<TicketService<R>>>,
    Path(dest): Path<String>,
) -> TicketResult<Json<CountryShare>> {
    let percentage = service.share_by_country(&dest).await?;
    Ok(Json(CountryShare {
        country: dest,
        percentage,
    }))
}
