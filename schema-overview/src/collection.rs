//! Collection overview
//!
//! A collection groups fields the way a table groups columns. Field
//! payloads are reference counted so a reduced schema can share them with
//! the schema it was derived from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::field::Field;

/// Activity tracking level of a collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accountability {
    /// Track activity and revisions
    All,
    /// Track activity only
    Activity,
}

/// A named, table-like entity of the data model.
///
/// # Examples
///
/// ```
/// use schema_overview::{Collection, Field};
///
/// let articles = Collection::new("articles", "id")
///     .with_field(Field::new("id", "integer"))
///     .with_field(Field::new("title", "string"));
/// assert_eq!(articles.fields.len(), 2);
/// assert!(articles.has_field("title"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection name, unique within the schema
    pub collection: String,

    /// Primary key field name
    pub primary: String,

    /// Whether the collection holds a single item
    #[serde(default)]
    pub singleton: bool,

    /// Field used for manual sorting
    #[serde(default)]
    pub sort_field: Option<String>,

    /// Admin note
    #[serde(default)]
    pub note: Option<String>,

    /// Activity tracking level
    #[serde(default)]
    pub accountability: Option<Accountability>,

    /// Fields keyed by name
    #[serde(default)]
    pub fields: BTreeMap<String, Arc<Field>>,
}

impl Collection {
    /// Creates a collection without fields.
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection name
    /// * `primary` - Primary key field name
    pub fn new(collection: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            primary: primary.into(),
            singleton: false,
            sort_field: None,
            note: None,
            accountability: Some(Accountability::All),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, keyed by its name.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.field.clone(), Arc::new(field));
        self
    }

    /// Copy of this collection's attributes with a different field map.
    pub fn with_fields(&self, fields: BTreeMap<String, Arc<Field>>) -> Self {
        Self {
            collection: self.collection.clone(),
            primary: self.primary.clone(),
            singleton: self.singleton,
            sort_field: self.sort_field.clone(),
            note: self.note.clone(),
            accountability: self.accountability,
            fields,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Arc<Field>> {
        self.fields.get(name)
    }

    /// Check if the collection has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in key order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
