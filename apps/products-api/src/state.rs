//! Application state management

use core_config::storage::StorageBackend;
use domain_products::{JsonFileStorage, MemoryStorage, ProductService, StorageProductRepository};
use domain_tickets::{InMemoryTicketRepository, TicketService};
use domain_vehicles::{InMemoryVehicleRepository, VehicleService};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<StorageProductRepository>,
    pub vehicles: VehicleService<InMemoryVehicleRepository>,
    pub tickets: TicketService<InMemoryTicketRepository>,
}

impl AppState {
    /// Opens every data source named in the configuration
    pub async fn build(config: Config) -> eyre::Result<Self> {
        let storage = &config.storage;

        let products = match storage.products_backend {
            StorageBackend::Memory => StorageProductRepository::new(MemoryStorage::new()),
            StorageBackend::File => {
                StorageProductRepository::new(JsonFileStorage::open(&storage.products_file).await?)
            }
        };
        info!(backend = %storage.products_backend, "Product storage ready");

        let vehicles = match &storage.vehicles_file {
            Some(path) => InMemoryVehicleRepository::load(path).await?,
            None => InMemoryVehicleRepository::new(),
        };

        let tickets = match &storage.tickets_file {
            Some(path) => InMemoryTicketRepository::from_csv(path)?,
            None => InMemoryTicketRepository::default(),
        };

        Ok(Self {
            products: ProductService::new(products),
            vehicles: VehicleService::new(vehicles),
            tickets: TicketService::new(tickets),
            config,
        })
    }
}
