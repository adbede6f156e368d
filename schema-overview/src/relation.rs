//! Relation overview
//!
//! A relation is an edge from a field of one collection to another
//! collection. Many-to-any relations have no single related collection and
//! list their candidate targets in [`RelationMeta::one_allowed_collections`].

use serde::{Deserialize, Serialize};

/// What happens to the many side when an item is deselected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeselectAction {
    /// Set the foreign key to null
    #[default]
    Nullify,
    /// Delete the related item
    Delete,
}

/// Metadata describing how a relation is presented and traversed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RelationMeta {
    /// Metadata row identifier
    #[serde(default)]
    pub id: Option<i64>,

    /// Collection holding the foreign key
    #[serde(default)]
    pub many_collection: Option<String>,

    /// Field holding the foreign key
    #[serde(default)]
    pub many_field: Option<String>,

    /// Collection the foreign key points at
    #[serde(default)]
    pub one_collection: Option<String>,

    /// Reverse (O2M) field on the related collection
    #[serde(default)]
    pub one_field: Option<String>,

    /// Field storing the target collection name for many-to-any relations
    #[serde(default)]
    pub one_collection_field: Option<String>,

    /// Valid target collections of a many-to-any relation
    #[serde(default)]
    pub one_allowed_collections: Option<Vec<String>>,

    /// Field on the junction collection pointing at the other side
    #[serde(default)]
    pub junction_field: Option<String>,

    /// Field used for manual sorting of related items
    #[serde(default)]
    pub sort_field: Option<String>,

    /// Behavior when a related item is deselected
    #[serde(default)]
    pub one_deselect_action: DeselectAction,
}

/// An edge between collections.
///
/// # Examples
///
/// ```
/// use schema_overview::{Relation, RelationMeta};
///
/// let relation = Relation::new("articles", "author", Some("authors")).with_meta(RelationMeta {
///     one_field: Some("articles".to_string()),
///     ..RelationMeta::default()
/// });
/// assert_eq!(relation.one_field(), Some("articles"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relation {
    /// Source collection name
    pub collection: String,

    /// Source field name
    pub field: String,

    /// Target collection name, absent for many-to-any relations
    #[serde(default)]
    pub related_collection: Option<String>,

    /// Foreign key constraint information from the database
    #[serde(default)]
    pub schema: Option<serde_json::Value>,

    /// Presentation metadata
    #[serde(default)]
    pub meta: Option<RelationMeta>,
}

impl Relation {
    /// Creates a relation without metadata.
    pub fn new(
        collection: impl Into<String>,
        field: impl Into<String>,
        related_collection: Option<&str>,
    ) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            related_collection: related_collection.map(str::to_string),
            schema: None,
            meta: None,
        }
    }

    /// Attaches metadata.
    pub fn with_meta(mut self, meta: RelationMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Reverse field name on the related collection, if any.
    pub fn one_field(&self) -> Option<&str> {
        self.meta.as_ref()?.one_field.as_deref()
    }

    /// Allowed targets of a many-to-any relation, if any.
    pub fn one_allowed_collections(&self) -> Option<&[String]> {
        self.meta.as_ref()?.one_allowed_collections.as_deref()
    }

    /// Check if the relation starts at or points into `collection`.
    pub fn touches(&self, collection: &str) -> bool {
        self.collection == collection || self.related_collection.as_deref() == Some(collection)
    }
}
