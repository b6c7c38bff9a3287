use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod products;

/// Route table: four fixed (method, path) pairs.
pub fn router() -> Router {
    Router::new()
        .route("/create-product", post(products::create_product))
        .route("/products/:product_id", get(products::get_single_product))
        .route("/delete-product/:product_id", delete(products::delete_single_product))
        .route("/update-product/:product_id", put(products::update_product_by_id))
}
