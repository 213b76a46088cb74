//! Record-level persistence for products.
//!
//! Two backends share the [`ProductStorage`] contract: an in-process map and
//! a JSON array file. Both serialize their operations so concurrent requests
//! never observe a half-applied write.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::ProductResult;
use crate::models::Product;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStorage: Send + Sync {
    async fn read_all(&self) -> ProductResult<Vec<Product>>;

    /// Fails with `NotFound` when the id is unknown
    async fn read_by_id(&self, id: &str) -> ProductResult<Product>;

    /// Fails with `AlreadyExists` when the id is taken
    async fn save(&self, product: Product) -> ProductResult<()>;

    /// Replaces the record with the same id; fails with `NotFound` otherwise
    async fn update(&self, product: Product) -> ProductResult<()>;

    async fn delete(&self, id: &str) -> ProductResult<()>;
}
