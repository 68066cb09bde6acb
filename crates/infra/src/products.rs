//! Product lookup boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use banking_core::ProductCode;
use banking_products::Product;

use crate::error::LookupError;

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, LookupError>;
}

#[async_trait]
impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, LookupError> {
        (**self).find_by_code(code).await
    }
}

/// In-memory product catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    inner: RwLock<HashMap<ProductCode, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.code.clone(), product);
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, LookupError> {
        let map = self
            .inner
            .read()
            .map_err(|_| LookupError::Unavailable("lock poisoned".to_string()))?;
        map.get(code).cloned().ok_or(LookupError::NotFound)
    }
}
