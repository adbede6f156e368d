//! Field overview

use serde::{Deserialize, Serialize};

/// A column-like attribute of a collection.
///
/// The projector never looks inside a field; it keeps or drops the whole
/// value by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name, unique within its collection
    pub field: String,

    /// Database default value
    #[serde(default)]
    pub default_value: serde_json::Value,

    /// Whether the column accepts null
    #[serde(default = "default_true")]
    pub nullable: bool,

    /// Whether the value is generated by the database
    #[serde(default)]
    pub generated: bool,

    /// Logical type (`string`, `integer`, `alias`, ...)
    #[serde(rename = "type")]
    pub field_type: String,

    /// Native database type
    #[serde(default)]
    pub db_type: Option<String>,

    /// Numeric precision
    #[serde(default)]
    pub precision: Option<u32>,

    /// Numeric scale
    #[serde(default)]
    pub scale: Option<u32>,

    /// Special flags such as `uuid` or `m2o`
    #[serde(default)]
    pub special: Vec<String>,

    /// Admin note
    #[serde(default)]
    pub note: Option<String>,

    /// Whether the field exists only in metadata and has no column
    #[serde(default)]
    pub alias: bool,
}

fn default_true() -> bool {
    true
}

impl Field {
    /// Creates a nullable, non-generated field of the given type.
    pub fn new(field: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            default_value: serde_json::Value::Null,
            nullable: true,
            generated: false,
            field_type: field_type.into(),
            db_type: None,
            precision: None,
            scale: None,
            special: Vec::new(),
            note: None,
            alias: false,
        }
    }

    /// Marks the field as an alias (e.g. the reverse side of an O2M).
    pub fn as_alias(mut self) -> Self {
        self.alias = true;
        self
    }
}
