//! Tickets Domain
//!
//! Read-only airline ticket statistics loaded from a CSV export.

pub mod error;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{TicketError, TicketResult};
pub use handlers::ApiDoc;
pub use models::{CountryShare, CountryTickets, Ticket, TicketTotal};
pub use repository::{InMemoryTicketRepository, TicketRepository};
pub use service::TicketService;
