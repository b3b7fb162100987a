//! Schema validator for candidate records
//!
//! Validation semantics:
//! - Every required field is present, non-null, and (for strings) non-empty
//! - Field types exactly match schema types, with no coercion
//! - Undeclared fields are ignored here and carried through untouched
//! - All violations are collected; validation never stops at the first one

use serde_json::{Map, Value};

use super::errors::{SchemaResult, ValidationError, Violation};
use super::types::{FieldDef, FieldType, Schema, PRAYER_SCHEMA};

/// Schema validator that checks candidates against a fixed schema.
///
/// Validator does not mutate documents.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a candidate document.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violation, in schema
    /// declaration order, when the candidate is not an object or any field
    /// is missing or mistyped.
    pub fn validate(&self, candidate: &Value) -> SchemaResult<()> {
        let obj = candidate
            .as_object()
            .ok_or_else(|| ValidationError::new(vec![Violation::not_an_object()]))?;

        let violations: Vec<Violation> = self
            .schema
            .fields
            .iter()
            .filter_map(|field| check_field(obj, field))
            .collect();

        if violations.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            schema = self.schema.name,
            violations = violations.len(),
            "candidate rejected"
        );
        Err(ValidationError::new(violations))
    }
}

impl SchemaValidator<'static> {
    /// Validator bound to the prayer schema.
    pub fn prayer() -> Self {
        Self::new(&PRAYER_SCHEMA)
    }
}

/// Checks one field, returning its violation if any.
fn check_field(obj: &Map<String, Value>, field: &FieldDef) -> Option<Violation> {
    match obj.get(field.name) {
        None | Some(Value::Null) => field
            .required
            .then(|| Violation::missing_field(field.name)),
        Some(value) => {
            if !matches_type(value, field.field_type) {
                return Some(Violation::type_mismatch(field.name, field.field_type));
            }
            if field.required && value.as_str() == Some("") {
                return Some(Violation::missing_field(field.name));
            }
            None
        }
    }
}

fn matches_type(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::String => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
    }
}
