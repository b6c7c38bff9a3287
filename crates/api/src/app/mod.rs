//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and the shared handler state
//! - `routes/`: HTTP routes + handlers
//! - `extract.rs`: request body extraction
//! - `dto.rs`: the JSON response envelope
//! - `errors.rs`: envelope responses and the top-level fallback

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use productstore_infra::ProductStore;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The store is injected so tests can substitute in-memory or failing doubles.
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    routes::router().layer(Extension(services)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(errors::handle_panic)),
    )
}
