//! Product document store boundary.
//!
//! Handlers only see the `ProductStore` trait; the concrete backend is chosen
//! at startup and injected into the router.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use r#trait::{parse_id, ProductStore, StoreError};
