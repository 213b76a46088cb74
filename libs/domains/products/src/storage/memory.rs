use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::storage::ProductStorage;
use crate::validation::check_unique_code_value;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Volatile storage; contents are lost on restart
#[derive(Clone, Default)]
pub struct MemoryStorage {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProductStorage for MemoryStorage {
    async fn read_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn read_by_id(&self, id: &str) -> ProductResult<Product> {
        self.products
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn save(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(ProductError::AlreadyExists(product.id));
        }
        check_unique_code_value(products.values(), &product)?;
        products.insert(product.id.clone(), product);
        Ok(())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            check_unique_code_value(products.values(), &product)?;
        }
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(ProductError::NotFound(product.id)),
        }
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        self.products
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Oil".to_string(),
            quantity: 3,
            code_value: format!("C-{id}"),
            is_published: false,
            expiration: "01/01/2030".to_string(),
            price: 2.5,
        }
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_id() {
        let storage = MemoryStorage::new();
        storage.save(product("a")).await.unwrap();

        let result = storage.save(product("a")).await;
        assert!(matches!(result, Err(ProductError::AlreadyExists(id)) if id == "a"));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let storage = MemoryStorage::with_products([product("a")]);

        assert!(matches!(
            storage.update(product("b")).await,
            Err(ProductError::NotFound(_))
        ));
        assert!(matches!(
            storage.delete("b").await,
            Err(ProductError::NotFound(_))
        ));

        storage.delete("a").await.unwrap();
        assert!(storage.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_code_value_stays_unique_across_writes() {
        let storage = MemoryStorage::with_products([product("a"), product("b")]);

        let mut clash = product("c");
        clash.code_value = "C-a".to_string();
        assert!(matches!(
            storage.save(clash).await,
            Err(ProductError::Validation(ValidationError::DuplicateCodeValue))
        ));

        let mut renamed = product("b");
        renamed.code_value = "C-a".to_string();
        assert!(matches!(
            storage.update(renamed).await,
            Err(ProductError::Validation(ValidationError::DuplicateCodeValue))
        ));

        assert_eq!(storage.read_all().await.unwrap().len(), 2);
        assert_eq!(storage.read_by_id("b").await.unwrap().code_value, "C-b");
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let storage = MemoryStorage::with_products([product("a")]);
        let mut changed = product("a");
        changed.price = 9.0;

        storage.update(changed.clone()).await.unwrap();
        assert_eq!(storage.read_by_id("a").await.unwrap(), changed);
    }
}
