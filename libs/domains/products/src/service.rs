//! Product Service - Business logic layer

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPatch, TotalPrice, Upserted};
use crate::pricing;
use crate::repository::ProductRepository;
use crate::validation;

/// Product service providing business logic operations
///
/// Runs the validation chain (required fields, code uniqueness, date) before
/// any write and computes the derived price views.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product with a server-assigned id
    #[instrument(skip(self, input), fields(code_value = %input.code_value))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let product = input.into_product(String::new());
        self.validate(&product).await?;

        let created = self.repository.create(product).await?;
        info!(product_id = %created.id, "Product created");
        Ok(created)
    }

    /// Replace an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let product = input.into_product(id);
        self.validate(&product).await?;
        self.repository.update(product).await
    }

    /// Replace the product, or create a new one when `id` is unknown
    #[instrument(skip(self, input))]
    pub async fn upsert_product(&self, id: &str, input: ProductInput) -> ProductResult<Upserted> {
        match self.update_product(id, input.clone()).await {
            Ok(product) => Ok(Upserted::Updated(product)),
            Err(ProductError::NotFound(_)) => {
                info!("Product not found, creating instead");
                self.create_product(input).await.map(Upserted::Created)
            }
            Err(e) => Err(e),
        }
    }

    /// Merge the given fields without re-validating the record
    #[instrument(skip(self, patch))]
    pub async fn patch_product(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        self.repository.patch(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await?;
        info!("Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository.get_by_id(id).await
    }

    /// All products; `NoRecords` when the store is empty
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Products priced strictly above `threshold`
    #[instrument(skip(self))]
    pub async fn search_by_price(&self, threshold: f64) -> ProductResult<Vec<Product>> {
        let products = self.existing_products().await?;
        Ok(products
            .into_iter()
            .filter(|product| product.price > threshold)
            .collect())
    }

    /// Taxed total for the listed ids, or for the whole catalog when `ids` is empty.
    ///
    /// Each listed id is one unit; repeating an id more often than its stock
    /// fails the whole call. Unknown ids are skipped. Every priced product is
    /// marked as published.
    #[instrument(skip(self))]
    pub async fn total_price(&self, ids: &[String]) -> ProductResult<TotalPrice> {
        let (products, quantity) = if ids.is_empty() {
            let products = self.existing_products().await?;
            let quantity = products.iter().map(|p| p.quantity).sum();
            (products, quantity)
        } else {
            let products = self.take_listed(ids).await?;
            let quantity = products.len() as i64;
            (products, quantity)
        };

        if products.is_empty() {
            return Err(ProductError::NoProductsAvailable);
        }

        let subtotal: f64 = products.iter().map(|p| p.price).sum();
        let total_price = pricing::apply_tax(subtotal, quantity);

        info!(quantity, subtotal, total_price, "Consumer price computed");
        Ok(TotalPrice {
            products,
            total_price,
        })
    }

    async fn take_listed(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
        let mut taken: HashMap<&str, i64> = HashMap::new();
        let mut products = Vec::with_capacity(ids.len());

        for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            let mut product = match self.repository.get_by_id(id).await {
                Ok(product) => product,
                Err(ProductError::NotFound(_)) => {
                    warn!(product_id = id, "Skipping unknown product");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let count = taken.entry(id).or_insert(0);
            *count += 1;
            if *count > product.quantity {
                return Err(ProductError::InsufficientStock(id.to_string()));
            }

            product.is_published = true;
            let product = self.repository.update(product).await?;
            info!(product_id = id, "Product marked as published");
            products.push(product);
        }

        Ok(products)
    }

    async fn validate(&self, product: &Product) -> ProductResult<()> {
        validation::validate_required_fields(product)?;
        let existing = self.existing_products().await?;
        validation::check_unique_code_value(&existing, product)?;
        validation::validate_date(&product.expiration)?;
        Ok(())
    }

    async fn existing_products(&self) -> ProductResult<Vec<Product>> {
        match self.repository.get_all().await {
            Err(ProductError::NoRecords) => Ok(Vec::new()),
            other => other,
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
