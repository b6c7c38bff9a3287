use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use productstore_infra::StoreError;

use crate::app::dto::Envelope;

/// Plain-text body of the last-resort 500 response.
pub const FALLBACK_BODY: &str = "Something went wrong!";

pub fn json_envelope(status: StatusCode, envelope: Envelope) -> Response {
    (status, axum::Json(envelope)).into_response()
}

pub fn not_found(message: &'static str) -> Response {
    json_envelope(StatusCode::NOT_FOUND, Envelope::fail(message))
}

/// 500 envelope carrying the store failure's description verbatim.
pub fn store_error_to_response(message: &'static str, err: StoreError) -> Response {
    tracing::error!(error = %err, "{message}");
    json_envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        Envelope::error(message, err.to_string()),
    )
}

/// Top-level fallback for failures outside any handler.
pub fn unhandled(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "unhandled request failure");
    (StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY).into_response()
}

/// `CatchPanicLayer` hook: a panic anywhere in the request path becomes the
/// plain-text fallback.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    unhandled(format_args!("panic: {detail}"))
}
