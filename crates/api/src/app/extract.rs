//! Request extraction for product routes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    response::Response,
};

use productstore_core::{fields_from_value, ProductFields};

use crate::app::errors;

/// The raw `:product_id` path segment.
///
/// A segment that does not percent-decode to UTF-8 is rejected with the
/// top-level fallback; everything else reaches the store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(product_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| errors::unhandled(e.body_text()))?;
        Ok(Self(product_id))
    }
}

/// A JSON-object request body.
///
/// Without a JSON content type the body is not parsed and yields an empty
/// object; an empty JSON body is also an empty object. Anything that fails to
/// parse, or parses to something other than an object, is rejected with the
/// top-level fallback rather than a handler envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBody(pub ProductFields);

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(ProductFields::new()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| errors::unhandled(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(ProductFields::new()));
        }

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(errors::unhandled)?;
        let fields = fields_from_value(value).map_err(errors::unhandled)?;
        Ok(Self(fields))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use serde_json::json;

    use super::*;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<ProductBody, Response> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/create-product");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        ProductBody::from_request(req, &()).await
    }

    #[tokio::test]
    async fn parses_json_object() {
        let ProductBody(fields) = extract(Some("application/json; charset=utf-8"), r#"{"name":"Widget"}"#)
            .await
            .unwrap();
        assert_eq!(fields.get("name"), Some(&json!("Widget")));
    }

    #[tokio::test]
    async fn non_json_content_type_is_empty_object() {
        let ProductBody(fields) = extract(Some("text/plain"), r#"{"name":"Widget"}"#).await.unwrap();
        assert!(fields.is_empty());

        let ProductBody(fields) = extract(None, "whatever").await.unwrap();
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn empty_json_body_is_empty_object() {
        let ProductBody(fields) = extract(Some("application/json"), "").await.unwrap();
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_fallback() {
        let res = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn non_object_json_is_rejected_with_fallback() {
        let res = extract(Some("application/json"), "[1,2,3]").await.unwrap_err();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn json_suffix_types_are_not_parsed() {
        let ProductBody(fields) = extract(Some("application/vnd.api+json"), "{not json").await.unwrap();
        assert!(fields.is_empty());

        let ProductBody(fields) = extract(Some("Application/JSON"), r#"{"a":1}"#).await.unwrap();
        assert_eq!(fields.get("a"), Some(&json!(1)));
    }
}
