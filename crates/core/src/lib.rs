//! `productstore-core` — product document primitives.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no storage).

pub mod error;
pub mod id;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use product::{fields_from_value, Product, ProductFields, ID_FIELD};
