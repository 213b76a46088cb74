use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPatch};
use crate::storage::ProductStorage;

/// Repository trait for Product persistence
///
/// Assigns identifiers and turns storage outcomes into the domain's
/// `NotFound` / `NoRecords` distinction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a product under a freshly generated id and return it
    async fn create(&self, product: Product) -> ProductResult<Product>;

    async fn get_by_id(&self, id: &str) -> ProductResult<Product>;

    /// All products; `NoRecords` when there are none
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Replace the product with the same id
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Merge the set fields of `patch` into an existing product
    async fn patch(&self, id: &str, patch: ProductPatch) -> ProductResult<Product>;

    async fn delete(&self, id: &str) -> ProductResult<()>;
}

/// [`ProductRepository`] over any [`ProductStorage`] backend
#[derive(Clone)]
pub struct StorageProductRepository {
    storage: Arc<dyn ProductStorage>,
}

impl StorageProductRepository {
    pub fn new(storage: impl ProductStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

#[async_trait]
impl ProductRepository for StorageProductRepository {
    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        product.id = Uuid::new_v4().to_string();
        self.storage.save(product.clone()).await?;
        debug!(product_id = %product.id, "Product stored");
        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Product> {
        self.storage.read_by_id(id).await
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.storage.read_all().await?;
        if products.is_empty() {
            return Err(ProductError::NoRecords);
        }
        Ok(products)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        self.storage.update(product.clone()).await?;
        Ok(product)
    }

    async fn patch(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        let mut product = self.storage.read_by_id(id).await?;
        patch.apply(&mut product);
        self.storage.update(product.clone()).await?;
        Ok(product)
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        self.storage.delete(id).await
    }
}
