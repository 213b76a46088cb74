use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Destination country
    pub country: String,
    /// Departure time, `HH:MM`
    pub hour: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketTotal {
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryTickets {
    pub country: String,
    pub total: usize,
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryShare {
    pub country: String,
    /// Share of all tickets going to `country`, 0 to 100
    pub percentage: f64,
}
