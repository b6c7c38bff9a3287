use std::sync::Arc;

use thiserror::Error;

use productstore_core::{DomainError, Product, ProductFields, ProductId};

/// Product store operation error.
///
/// These are **failures**, not absence: a lookup that matches nothing is
/// `Ok(None)`. Callers report the `Display` string of these errors verbatim.
///
/// ## Error Categories
///
/// - **Cast**: the raw identifier is not a valid `ProductId`
/// - **Database**: the backend rejected or failed the operation
/// - **Serialization**: a stored document could not be decoded
/// - **Unavailable**: the store cannot serve requests (poisoned lock, closed pool)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cast failed: {0}")]
    Cast(#[from] DomainError),

    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    #[error("document serialization failed: {0}")]
    Serialization(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Async document store for products.
///
/// Identifiers arrive as the raw strings clients sent. Implementations must
/// report a malformed identifier as `StoreError::Cast`, never as `Ok(None)`.
///
/// ## Atomicity
///
/// `find_by_id_and_delete` and `find_by_id_and_update` must each be atomic
/// with respect to concurrent calls on the same identifier.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new document; the store assigns the identifier.
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Remove a document, returning it as it was before removal.
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Merge `fields` into a document, returning the post-update state.
    async fn find_by_id_and_update(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        (**self).create(fields).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id_and_delete(id).await
    }

    async fn find_by_id_and_update(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id_and_update(id, fields).await
    }
}

/// Parse a raw path identifier, mapping failure to `StoreError::Cast`.
pub fn parse_id(raw: &str) -> Result<ProductId, StoreError> {
    Ok(raw.parse::<ProductId>()?)
}
