//! # Permissions
//!
//! Permission rules as produced by the permission store. A permission
//! grants one action on one collection, optionally restricted to a subset
//! of fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actions::{Action, ActionSet};

/// Field-grant token meaning "all fields of the collection".
pub const WILDCARD: &str = "*";

/// An access-control rule for a single collection and action.
///
/// Only `collection`, `action` and `fields` shape schema visibility. The
/// row-level payloads (`permissions`, `validation`, `presets`, `limit`) are
/// carried verbatim for downstream consumers and never interpreted here.
///
/// # Example
///
/// ```
/// use schema_rbac::{Action, Permission};
///
/// let perm = Permission::with_fields("articles", Action::Read, ["id", "title"]);
/// assert_eq!(perm.fields.as_deref(), Some(&["id".to_string(), "title".to_string()][..]));
/// assert!(!perm.grants_all_fields());
///
/// let perm = Permission::all_fields("articles", Action::Read);
/// assert!(perm.grants_all_fields());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permission {
    /// Row identifier in the permission store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Role this permission belongs to. `None` is the public role.
    #[serde(default)]
    pub role: Option<Uuid>,

    /// Collection the permission applies to.
    pub collection: String,

    /// The action allowed on the collection.
    pub action: Action,

    /// Allowed field names. May contain [`WILDCARD`].
    ///
    /// `None` and an empty list both grant no fields explicitly.
    #[serde(default)]
    pub fields: Option<Vec<String>>,

    /// Row-level filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,

    /// Payload validation filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<serde_json::Value>,

    /// Default values applied on create/update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<serde_json::Value>,

    /// Maximum number of items per request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Whether the permission is built in rather than user defined.
    #[serde(default)]
    pub system: bool,
}

impl Permission {
    /// Create a permission without any field grants.
    ///
    /// # Arguments
    ///
    /// * `collection` - The collection name
    /// * `action` - The action allowed
    pub fn new(collection: impl Into<String>, action: Action) -> Self {
        Self {
            id: None,
            role: None,
            collection: collection.into(),
            action,
            fields: None,
            permissions: None,
            validation: None,
            presets: None,
            limit: None,
            system: false,
        }
    }

    /// Create a permission granting an explicit list of fields.
    pub fn with_fields<I, S>(collection: impl Into<String>, action: Action, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
            ..Self::new(collection, action)
        }
    }

    /// Create a permission granting every field through [`WILDCARD`].
    pub fn all_fields(collection: impl Into<String>, action: Action) -> Self {
        Self::with_fields(collection, action, [WILDCARD])
    }

    /// Assign the permission to a role.
    pub fn for_role(mut self, role: Uuid) -> Self {
        self.role = Some(role);
        self
    }

    /// Check if this permission targets `collection` with one of `actions`.
    pub fn applies_to(&self, collection: &str, actions: &ActionSet) -> bool {
        self.collection == collection && actions.contains(self.action)
    }

    /// Check if the field list contains [`WILDCARD`].
    pub fn grants_all_fields(&self) -> bool {
        self.fields
            .as_ref()
            .is_some_and(|fields| fields.iter().any(|field| field == WILDCARD))
    }

    /// Check if this is a public (role-less) permission.
    pub fn is_public(&self) -> bool {
        self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_creation() {
        let perm = Permission::new("articles", Action::Read);
        assert_eq!(perm.collection, "articles");
        assert_eq!(perm.action, Action::Read);
        assert!(perm.fields.is_none());
        assert!(perm.is_public());
        assert!(!perm.system);
    }

    #[test]
    fn test_permission_for_role() {
        let role = Uuid::now_v7();
        let perm = Permission::new("articles", Action::Update).for_role(role);
        assert_eq!(perm.role, Some(role));
        assert!(!perm.is_public());
    }

    #[test]
    fn test_applies_to() {
        let perm = Permission::new("articles", Action::Read);
        assert!(perm.applies_to("articles", &ActionSet::only(Action::Read)));
        assert!(perm.applies_to("articles", &ActionSet::all()));
        assert!(!perm.applies_to("articles", &ActionSet::only(Action::Update)));
        assert!(!perm.applies_to("authors", &ActionSet::all()));
        assert!(!perm.applies_to("articles", &ActionSet::new()));
    }

    #[test]
    fn test_grants_all_fields() {
        assert!(Permission::all_fields("articles", Action::Read).grants_all_fields());
        assert!(Permission::with_fields("articles", Action::Read, ["id", "*"]).grants_all_fields());
        assert!(!Permission::with_fields("articles", Action::Read, ["id"]).grants_all_fields());
        assert!(!Permission::with_fields("articles", Action::Read, Vec::<String>::new()).grants_all_fields());
        assert!(!Permission::new("articles", Action::Read).grants_all_fields());
    }

    #[test]
    fn test_permission_deserialization() {
        let perm: Permission = serde_json::from_value(json!({
            "id": 7,
            "role": null,
            "collection": "articles",
            "action": "read",
            "permissions": { "status": { "_eq": "published" } },
            "validation": null,
            "limit": null,
            "presets": null,
            "fields": ["id", "title"]
        }))
        .unwrap();

        assert_eq!(perm.id, Some(7));
        assert_eq!(perm.action, Action::Read);
        assert_eq!(perm.fields, Some(vec!["id".to_string(), "title".to_string()]));
        assert_eq!(perm.permissions, Some(json!({ "status": { "_eq": "published" } })));
        assert!(perm.validation.is_none());
        assert!(!perm.system);
    }

    #[test]
    fn test_permission_without_fields_key() {
        let perm: Permission = serde_json::from_value(json!({
            "collection": "articles",
            "action": "delete"
        }))
        .unwrap();
        assert!(perm.fields.is_none());
        assert_eq!(perm.action, Action::Delete);
    }

    #[test]
    fn test_permission_rejects_unknown_action() {
        let result = serde_json::from_value::<Permission>(json!({
            "collection": "articles",
            "action": "share"
        }));
        assert!(result.is_err());
    }
}
