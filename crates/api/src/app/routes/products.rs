use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
};

use productstore_core::Product;
use productstore_infra::StoreError;

use crate::app::dto::Envelope;
use crate::app::errors;
use crate::app::extract::{ProductBody, ProductIdPath};
use crate::app::services::AppServices;

const NOT_FOUND: &str = "Product not found";

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductBody(fields): ProductBody,
) -> Response {
    match services.store().create(fields).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id(), "product created");
            errors::json_envelope(
                StatusCode::CREATED,
                Envelope::success("Product created successfully", product),
            )
        }
        Err(e) => errors::store_error_to_response("Error creating product", e),
    }
}

pub async fn get_single_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdPath(product_id): ProductIdPath,
) -> Response {
    let result = services.store().find_by_id(&product_id).await;
    lookup_response(
        &product_id,
        result,
        "Product fetched successfully",
        "Error fetching product",
    )
}

pub async fn delete_single_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdPath(product_id): ProductIdPath,
) -> Response {
    let result = services.store().find_by_id_and_delete(&product_id).await;
    lookup_response(
        &product_id,
        result,
        "Product deleted successfully",
        "Error deleting product",
    )
}

pub async fn update_product_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdPath(product_id): ProductIdPath,
    ProductBody(fields): ProductBody,
) -> Response {
    let result = services
        .store()
        .find_by_id_and_update(&product_id, fields)
        .await;
    lookup_response(
        &product_id,
        result,
        "Product updated successfully",
        "Error updating product",
    )
}

/// Shape the outcome of a by-id store call: 200 when a document matched,
/// 404 when none did, 500 on failure.
fn lookup_response(
    product_id: &str,
    result: Result<Option<Product>, StoreError>,
    success: &'static str,
    failure: &'static str,
) -> Response {
    match result {
        Ok(Some(product)) => errors::json_envelope(StatusCode::OK, Envelope::success(success, product)),
        Ok(None) => {
            tracing::debug!(product_id, "product not found");
            errors::not_found(NOT_FOUND)
        }
        Err(e) => errors::store_error_to_response(failure, e),
    }
}
