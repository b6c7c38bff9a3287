use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DomainError, DomainResult, ProductId};

/// Client-supplied product fields: an arbitrary top-level JSON object.
pub type ProductFields = serde_json::Map<String, Value>;

/// Document key that carries the identifier.
pub const ID_FIELD: &str = "id";

/// A stored product document.
///
/// Serializes as a flat JSON object: `{"id": "...", <fields>...}`. The `id`
/// key is owned by the store; a client-supplied `id` is never kept as a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(flatten)]
    fields: ProductFields,
}

impl Product {
    /// Build a document from an existing identifier and raw fields.
    pub fn new(id: ProductId, mut fields: ProductFields) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    /// Build a brand-new document, assigning a fresh identifier.
    pub fn create(fields: ProductFields) -> Self {
        Self::new(ProductId::new(), fields)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn into_fields(self) -> ProductFields {
        self.fields
    }

    /// Apply a partial update.
    ///
    /// Top-level keys in `patch` overwrite existing keys (including with
    /// `null`); keys absent from `patch` keep their value. The identifier
    /// cannot be changed.
    pub fn merge(&mut self, patch: ProductFields) {
        for (key, value) in patch {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Consume `self`, returning the merged document.
    pub fn merged(mut self, patch: ProductFields) -> Self {
        self.merge(patch);
        self
    }
}

/// Interpret a parsed request body as product fields.
///
/// Only a top-level JSON object is a document.
pub fn fields_from_value(value: Value) -> DomainResult<ProductFields> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::validation(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
