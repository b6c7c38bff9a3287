use serde::Serialize;

use productstore_core::Product;

/// `type` discriminator of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
}

/// Uniform JSON response wrapper.
///
/// `{"type": "success"|"fail", "message": ..., "data"?: ..., "error"?: ...}`;
/// absent optional keys are omitted rather than sent as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub outcome: Outcome,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(message: &'static str, data: Product) -> Self {
        Self {
            outcome: Outcome::Success,
            message,
            data: Some(data),
            error: None,
        }
    }

    /// Failure with no detail (expected absence).
    pub fn fail(message: &'static str) -> Self {
        Self {
            outcome: Outcome::Fail,
            message,
            data: None,
            error: None,
        }
    }

    /// Failure carrying the underlying error description.
    pub fn error(message: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::fail(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fail_envelope_has_only_type_and_message() {
        let v = serde_json::to_value(Envelope::fail("Product not found")).unwrap();
        assert_eq!(v, json!({"type": "fail", "message": "Product not found"}));
    }

    #[test]
    fn error_envelope_carries_description() {
        let v = serde_json::to_value(Envelope::error("Error creating product", "boom")).unwrap();
        assert_eq!(
            v,
            json!({"type": "fail", "message": "Error creating product", "error": "boom"})
        );
    }

    #[test]
    fn success_envelope_embeds_document() {
        let mut fields = productstore_core::ProductFields::new();
        fields.insert("name".into(), json!("Widget"));
        let product = Product::create(fields);
        let id = product.id().to_string();

        let v = serde_json::to_value(Envelope::success("Product fetched successfully", product)).unwrap();
        assert_eq!(v["type"], "success");
        assert_eq!(v["data"], json!({"id": id, "name": "Widget"}));
        assert!(v.get("error").is_none());
    }
}
