//! Schema validation for submitted records
//!
//! Every create and update body is checked against the fixed prayer schema
//! before anything is written to the table.
//!
//! # Design Principles
//!
//! - Validation happens before the store is touched
//! - No nulls, defaults, or coercion
//! - All violations are reported, not just the first
//! - Deterministic ordering of messages

mod errors;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationError, Violation, ViolationKind};
pub use types::{FieldDef, FieldType, Schema, PRAYER_SCHEMA};
pub use validator::SchemaValidator;
