//! JSON Schema helpers for MCP tool input validation.
//!
//! Covers the subset of JSON Schema the tool definitions use:
//! `required`, per-property `type`, `enum`, `minLength` and `minimum`.
//! Properties not declared in the schema are ignored.

use serde_json::{Map, Value};
use thiserror::Error;

/// Schema validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The input does not match the expected schema.
    #[error("schema validation failed: {message}")]
    ValidationFailed { message: String },
    /// The schema itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },
}

impl SchemaError {
    fn failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }
}

/// Validates tool arguments against an object schema.
///
/// `null` input is treated as an empty object, since hosts may omit
/// `arguments` for tools without required parameters.
pub fn validate(schema: &Value, input: &Value) -> Result<(), SchemaError> {
    let empty = Map::new();
    let input_obj = match input {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(SchemaError::failed("input must be an object")),
    };

    validate_required_fields(schema, input_obj)?;

    let Some(properties) = schema.get("properties") else {
        return Ok(());
    };
    let properties = properties
        .as_object()
        .ok_or_else(|| SchemaError::invalid("properties must be an object"))?;

    for (name, prop_schema) in properties {
        if let Some(value) = input_obj.get(name) {
            validate_property(name, prop_schema, value)?;
        }
    }
    Ok(())
}

/// Checks that every name in the schema's `required` array is present.
fn validate_required_fields(
    schema: &Value,
    input: &Map<String, Value>,
) -> Result<(), SchemaError> {
    let required = match schema.get("required") {
        Some(Value::Array(arr)) => arr,
        Some(_) => return Err(SchemaError::invalid("required must be an array")),
        None => return Ok(()),
    };

    for field in required {
        let field_name = field
            .as_str()
            .ok_or_else(|| SchemaError::invalid("required field names must be strings"))?;
        if !input.contains_key(field_name) {
            return Err(SchemaError::failed(format!(
                "missing required field: {field_name}"
            )));
        }
    }
    Ok(())
}

fn validate_property(name: &str, schema: &Value, value: &Value) -> Result<(), SchemaError> {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        if !type_matches(expected, value) {
            return Err(SchemaError::failed(format!(
                "field '{name}' must be of type {expected}"
            )));
        }
    }

    if let Some(allowed) = schema.get("enum") {
        let allowed = allowed
            .as_array()
            .ok_or_else(|| SchemaError::invalid(format!("enum of '{name}' must be an array")))?;
        if !allowed.contains(value) {
            let options: Vec<String> = allowed.iter().map(Value::to_string).collect();
            return Err(SchemaError::failed(format!(
                "field '{name}' must be one of {}",
                options.join(", ")
            )));
        }
    }

    let min_length = schema.get("minLength").and_then(Value::as_u64);
    if let (Some(min_len), Some(s)) = (min_length, value.as_str()) {
        if (s.chars().count() as u64) < min_len {
            return Err(SchemaError::failed(format!(
                "field '{name}' must be at least {min_len} character(s) long"
            )));
        }
    }

    let minimum = schema.get("minimum").and_then(Value::as_f64);
    if let (Some(min), Some(n)) = (minimum, value.as_f64()) {
        if n < min {
            return Err(SchemaError::failed(format!("field '{name}' must be >= {min}")));
        }
    }

    Ok(())
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}
