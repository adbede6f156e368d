//! # Schema Overview
//!
//! The full structural description of a data model together with the
//! permission rules that apply to it.
//!
//! Payloads are held behind [`Arc`] so that derived schemas share fields,
//! relations and the permission list with their source instead of copying
//! them. Replacing keys in a derived schema never affects the source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use schema_rbac::Permission;

use crate::collection::Collection;
use crate::error::{SchemaError, SchemaResult};
use crate::field::Field;
use crate::relation::Relation;

/// Collections, relations and permissions of a project.
///
/// # Examples
///
/// ```
/// use schema_overview::{Collection, Field, Relation, SchemaOverview};
///
/// let schema = SchemaOverview::new(
///     [Collection::new("articles", "id").with_field(Field::new("id", "integer"))],
///     [Relation::new("articles", "author", Some("authors"))],
///     Vec::new(),
/// );
/// assert!(schema.collection("articles").is_some());
/// assert_eq!(schema.relations_for("authors").count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SchemaOverview {
    /// Collections keyed by name
    #[serde(default)]
    pub collections: BTreeMap<String, Collection>,

    /// Relations in definition order
    #[serde(default)]
    pub relations: Vec<Arc<Relation>>,

    /// Permission rules in definition order
    #[serde(default)]
    pub permissions: Arc<Vec<Permission>>,
}

impl SchemaOverview {
    /// Builds a schema, keying each collection by its name.
    pub fn new<C, R>(collections: C, relations: R, permissions: Vec<Permission>) -> Self
    where
        C: IntoIterator<Item = Collection>,
        R: IntoIterator<Item = Relation>,
    {
        Self {
            collections: collections
                .into_iter()
                .map(|collection| (collection.collection.clone(), collection))
                .collect(),
            relations: relations.into_iter().map(Arc::new).collect(),
            permissions: Arc::new(permissions),
        }
    }

    /// A schema without collections, relations or permissions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a schema document and validate it.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Malformed`] if the document does not decode,
    /// [`SchemaError::InvalidInput`] if it violates a structural invariant.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Decode a schema from a JSON value and validate it.
    pub fn from_value(value: serde_json::Value) -> SchemaResult<Self> {
        let schema: Self = serde_json::from_value(value)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Serialize the schema as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the naming invariants a schema producer must uphold.
    ///
    /// Collection and field names must be non-empty and match the key they
    /// are stored under. Relations must name a source collection and field.
    pub fn validate(&self) -> SchemaResult<()> {
        for (key, collection) in &self.collections {
            if key.is_empty() {
                return Err(SchemaError::InvalidInput(
                    "collection name must not be empty".to_string(),
                ));
            }
            if *key != collection.collection {
                return Err(SchemaError::InvalidInput(format!(
                    "collection stored under '{}' is named '{}'",
                    key, collection.collection
                )));
            }
            for (field_key, field) in &collection.fields {
                if field_key.is_empty() {
                    return Err(SchemaError::InvalidInput(format!(
                        "collection '{}' has a field with an empty name",
                        key
                    )));
                }
                if *field_key != field.field {
                    return Err(SchemaError::InvalidInput(format!(
                        "field stored under '{}.{}' is named '{}'",
                        key, field_key, field.field
                    )));
                }
            }
        }

        for (index, relation) in self.relations.iter().enumerate() {
            if relation.collection.is_empty() || relation.field.is_empty() {
                return Err(SchemaError::InvalidInput(format!(
                    "relation #{} must name a collection and a field",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Look up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Look up a field of a collection.
    pub fn field(&self, collection: &str, field: &str) -> Option<&Arc<Field>> {
        self.collection(collection)?.field(field)
    }

    /// Collection names in key order.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Relations starting at or pointing into `collection`.
    pub fn relations_for<'a>(&'a self, collection: &'a str) -> impl Iterator<Item = &'a Arc<Relation>> + 'a {
        self.relations
            .iter()
            .filter(move |relation| relation.touches(collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_rbac::Action;
    use serde_json::json;

    fn sample_document() -> serde_json::Value {
        json!({
            "collections": {
                "articles": {
                    "collection": "articles",
                    "primary": "id",
                    "fields": {
                        "id": { "field": "id", "type": "integer" },
                        "title": { "field": "title", "type": "string" }
                    }
                }
            },
            "relations": [
                { "collection": "articles", "field": "author", "related_collection": "authors" }
            ],
            "permissions": [
                { "collection": "articles", "action": "read", "fields": ["*"] }
            ]
        })
    }

    #[test]
    fn test_from_value() {
        let schema = SchemaOverview::from_value(sample_document()).unwrap();
        assert_eq!(schema.collection_names().collect::<Vec<_>>(), vec!["articles"]);
        assert_eq!(schema.relations.len(), 1);
        assert_eq!(schema.permissions.len(), 1);
        assert_eq!(schema.permissions[0].action, Action::Read);
        assert!(schema.field("articles", "title").is_some());
        assert!(schema.field("articles", "body").is_none());
        assert!(schema.field("authors", "id").is_none());
    }

    #[test]
    fn test_from_json_round_trip() {
        let schema = SchemaOverview::from_value(sample_document()).unwrap();
        let json = schema.to_json_pretty().unwrap();
        let decoded = SchemaOverview::from_json(&json).unwrap();
        assert_eq!(decoded, schema);
    }

    #[test]
    fn test_malformed_document() {
        let err = SchemaOverview::from_json("{ \"collections\": 3 }").unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unknown_permission_action_is_rejected() {
        let mut document = sample_document();
        document["permissions"][0]["action"] = json!("share");
        let err = SchemaOverview::from_value(document).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
    }

    #[test]
    fn test_collection_key_mismatch() {
        let mut document = sample_document();
        document["collections"]["articles"]["collection"] = json!("posts");
        let err = SchemaOverview::from_value(document).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput(_)));
        assert!(err.to_string().contains("'articles'"));
    }

    #[test]
    fn test_field_key_mismatch() {
        let mut document = sample_document();
        document["collections"]["articles"]["fields"]["title"]["field"] = json!("headline");
        let err = SchemaOverview::from_value(document).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput(_)));
    }

    #[test]
    fn test_relation_without_field() {
        let mut document = sample_document();
        document["relations"][0]["field"] = json!("");
        let err = SchemaOverview::from_value(document).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_schema_is_valid() {
        let schema = SchemaOverview::from_json("{}").unwrap();
        assert!(schema.collections.is_empty());
        assert!(schema.relations.is_empty());
        assert!(schema.permissions.is_empty());
        assert_eq!(schema, SchemaOverview::empty());
    }

    #[test]
    fn test_new_keys_collections_by_name() {
        let schema = SchemaOverview::new(
            [Collection::new("articles", "id"), Collection::new("authors", "id")],
            Vec::<Relation>::new(),
            Vec::new(),
        );
        assert!(schema.validate().is_ok());
        assert_eq!(schema.collection_names().collect::<Vec<_>>(), vec!["articles", "authors"]);
    }
}
