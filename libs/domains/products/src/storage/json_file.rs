use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::storage::ProductStorage;
use crate::validation::check_unique_code_value;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Products persisted as a pretty-printed JSON array.
///
/// Every operation reads the whole file and, for writes, rewrites it while
/// holding the same lock.
#[derive(Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStorage {
    /// Opens the file, creating it (and its parent directories) with `[]`
    /// when it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> ProductResult<Self> {
        let path = path.into();

        if tokio::fs::try_exists(&path).await? {
            debug!(path = %path.display(), "Using existing products file");
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, b"[]").await?;
            info!(path = %path.display(), "Created empty products file");
        }

        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ProductResult<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn store(&self, products: &[Product]) -> ProductResult<()> {
        let bytes = serde_json::to_vec_pretty(products)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStorage for JsonFileStorage {
    async fn read_all(&self) -> ProductResult<Vec<Product>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn read_by_id(&self, id: &str) -> ProductResult<Product> {
        let _guard = self.lock.lock().await;
        self.load()
            .await?
            .into_iter()
            .find(|product| product.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn save(&self, product: Product) -> ProductResult<()> {
        let _guard = self.lock.lock().await;
        let mut products = self.load().await?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::AlreadyExists(product.id));
        }
        check_unique_code_value(&products, &product)?;
        products.push(product);
        self.store(&products).await
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let _guard = self.lock.lock().await;
        let mut products = self.load().await?;
        if products.iter().any(|p| p.id == product.id) {
            check_unique_code_value(&products, &product)?;
        }
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| ProductError::NotFound(product.id.clone()))?;
        *slot = product;
        self.store(&products).await
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        let _guard = self.lock.lock().await;
        let mut products = self.load().await?;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(ProductError::NotFound(id.to_string()));
        }
        self.store(&products).await
    }
}
