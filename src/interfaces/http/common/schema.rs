//! Field-level request body checks
//!
//! Signup reports every problem with the body at once, one entry per
//! offending field, rather than failing on the first. The entries keep the
//! legacy `{"error": ..., "type": ...}` shape.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One reported problem with a request body field.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub error: String,
    /// `"Undefined."` for absent or empty fields, `"Invalid."` for wrong
    /// types.
    #[serde(rename = "type")]
    pub kind: String,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check that every named field is present as a non-empty string.
pub fn require_string_fields(body: &Map<String, Value>, fields: &[&str]) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in fields {
        match body.get(*field) {
            Some(Value::String(value)) if !value.is_empty() => {}
            Some(value) if !value.is_null() && !value.is_string() => {
                errors.push(FieldError {
                    error: format!(
                        r#"Invalid data type "{}" used. "string" required instead."#,
                        json_type_name(value)
                    ),
                    kind: "Invalid.".to_string(),
                });
            }
            _ => {
                errors.push(FieldError {
                    error: format!("Attribute {field} required in request body."),
                    kind: "Undefined.".to_string(),
                });
            }
        }
    }
    errors
}
