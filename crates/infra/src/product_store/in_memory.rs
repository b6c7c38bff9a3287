use std::collections::HashMap;
use std::sync::RwLock;

use productstore_core::{Product, ProductFields, ProductId};

use super::r#trait::{parse_id, ProductStore, StoreError};

/// In-memory product store.
///
/// Intended for tests/dev. Each operation runs under a single lock guard, so
/// find-and-delete and find-and-update are atomic.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    docs: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let product = Product::create(fields);
        let mut docs = self.docs.write().map_err(poisoned)?;
        docs.insert(product.id(), product.clone());
        tracing::debug!(product_id = %product.id(), "product created");
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let docs = self.docs.read().map_err(poisoned)?;
        Ok(docs.get(&id).cloned())
    }

    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut docs = self.docs.write().map_err(poisoned)?;
        Ok(docs.remove(&id))
    }

    async fn find_by_id_and_update(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut docs = self.docs.write().map_err(poisoned)?;
        Ok(docs.get_mut(&id).map(|doc| {
            doc.merge(fields);
            doc.clone()
        }))
    }
}
