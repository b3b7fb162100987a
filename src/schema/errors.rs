//! Schema error types
//!
//! A `ValidationError` carries every violation found in a candidate, in
//! schema declaration order. Nothing is dropped after the first failure.

use std::fmt;

use super::types::FieldType;

/// What went wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Absent, `null`, or an empty string
    Missing,
    /// Present with the wrong JSON type
    TypeMismatch {
        /// The declared type
        expected: FieldType,
    },
    /// The candidate itself is not a JSON object
    NotAnObject,
}

/// Validation failure details for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path, `this` for the document root
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: FieldType) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::TypeMismatch { expected },
        }
    }

    pub fn not_an_object() -> Self {
        Self {
            field: "this".into(),
            kind: ViolationKind::NotAnObject,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{} is a required field", self.field),
            ViolationKind::TypeMismatch { expected } => {
                write!(f, "{} must be a `{}` type", self.field, expected)
            }
            ViolationKind::NotAnObject => write!(f, "{} must be a `object` type", self.field),
        }
    }
}

/// One or more violations found in a candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wraps a non-empty list of violations
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Returns the violations in declaration order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the human-readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [only] => write!(f, "{}", only),
            all => write!(f, "{} errors occurred", all.len()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;
