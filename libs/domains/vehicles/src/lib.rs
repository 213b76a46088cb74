//! Vehicles Domain
//!
//! In-memory vehicle catalog with attribute filters, per-brand averages and
//! all-or-nothing batch registration.

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{VehicleError, VehicleResult};
pub use filter::VehicleFilter;
pub use handlers::ApiDoc;
pub use models::{Vehicle, VehicleInput};
pub use repository::{InMemoryVehicleRepository, VehicleRepository};
pub use service::VehicleService;
