//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string, non-empty when required
//! - number: any JSON number
//! - boolean: `true` or `false`

use std::fmt;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// JSON number (integer or float)
    Number,
    /// Boolean
    Boolean,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Attribute name as it appears on the wire
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub const fn required_string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create a required number field
    pub const fn required_number(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Number,
            required: true,
        }
    }

    /// Create a required boolean field
    pub const fn required_boolean(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Boolean,
            required: true,
        }
    }
}

/// Ordered field schema. Violations are reported in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Schema name, used in log output
    pub name: &'static str,
    /// Field definitions
    pub fields: &'static [FieldDef],
}

/// The fixed five-field prayer schema.
pub static PRAYER_SCHEMA: Schema = Schema {
    name: "prayer",
    fields: &[
        FieldDef::required_string("name"),
        FieldDef::required_string("verse"),
        FieldDef::required_string("passage"),
        FieldDef::required_number("percentageComplete"),
        FieldDef::required_boolean("read"),
    ],
};

impl Schema {
    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
