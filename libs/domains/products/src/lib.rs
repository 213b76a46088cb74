//! Products Domain
//!
//! Product catalog with pluggable storage, business validation and
//! consumer pricing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation chain, search, pricing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Id assignment, NotFound / NoRecords
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Storage   │  ← In-memory map or JSON file
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, JsonFileStorage, ProductService, StorageProductRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = JsonFileStorage::open("docs/db/products.json").await?;
//! let service = ProductService::new(StorageProductRepository::new(storage));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod service;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, ValidationError};
pub use handlers::ApiDoc;
pub use models::{Product, ProductInput, ProductPatch, TotalPrice, Upserted};
pub use repository::{ProductRepository, StorageProductRepository};
pub use service::ProductService;
pub use storage::{JsonFileStorage, MemoryStorage, ProductStorage};
