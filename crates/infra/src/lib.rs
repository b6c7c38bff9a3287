//! Infrastructure layer: product document storage.

pub mod product_store;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
