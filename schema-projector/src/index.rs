//! # Permission Index
//!
//! Collapses a permission list into, per collection, the set of field
//! names granted for a set of actions.

use std::collections::{HashMap, HashSet};

use schema_rbac::{ActionSet, Permission, WILDCARD};

/// Field names granted on one collection.
///
/// The literal [`WILDCARD`] is stored like any other name and makes
/// [`AllowedFields::allows`] accept every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedFields {
    fields: HashSet<String>,
}

impl AllowedFields {
    /// Create an entry without any field grants.
    pub fn new() -> Self {
        Self {
            fields: HashSet::new(),
        }
    }

    /// Union field names into the entry.
    pub fn extend<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.fields.extend(fields.into_iter().cloned());
    }

    /// Check if `field` is granted, directly or through the wildcard.
    pub fn allows(&self, field: &str) -> bool {
        self.has_wildcard() || self.fields.contains(field)
    }

    /// Check if the wildcard was granted.
    pub fn has_wildcard(&self) -> bool {
        self.fields.contains(WILDCARD)
    }

    /// Get the count of granted names, wildcard included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field was granted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the granted names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedFields {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Allowed fields per collection for a set of actions.
///
/// A collection has an entry as soon as one permission for it matches the
/// actions, even if none of those permissions grant fields.
///
/// # Example
///
/// ```
/// use schema_projector::PermissionIndex;
/// use schema_rbac::{Action, ActionSet, Permission};
///
/// let permissions = vec![
///     Permission::with_fields("articles", Action::Read, ["id", "title"]),
///     Permission::new("authors", Action::Read),
///     Permission::all_fields("pages", Action::Update),
/// ];
/// let index = PermissionIndex::build(&permissions, &ActionSet::only(Action::Read));
///
/// assert!(index.allows_field("articles", "title"));
/// assert!(index.contains_collection("authors"));
/// assert!(!index.allows_field("authors", "id"));
/// assert!(!index.contains_collection("pages"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionIndex {
    collections: HashMap<String, AllowedFields>,
}

impl PermissionIndex {
    /// Build the index from the permissions whose action is in `actions`.
    pub fn build(permissions: &[Permission], actions: &ActionSet) -> Self {
        let mut collections: HashMap<String, AllowedFields> = HashMap::new();

        for permission in permissions {
            if !actions.contains(permission.action) {
                continue;
            }

            let entry = collections.entry(permission.collection.clone()).or_default();
            if let Some(fields) = &permission.fields {
                entry.extend(fields);
            }
        }

        Self { collections }
    }

    /// Check if any matched permission mentions `collection`.
    pub fn contains_collection(&self, collection: &str) -> bool {
        self.collections.contains_key(collection)
    }

    /// Get the allowed fields of a collection.
    pub fn get(&self, collection: &str) -> Option<&AllowedFields> {
        self.collections.get(collection)
    }

    /// Check if `field` of `collection` is granted.
    ///
    /// `false` when the collection has no entry at all.
    pub fn allows_field(&self, collection: &str, field: &str) -> bool {
        self.get(collection).is_some_and(|allowed| allowed.allows(field))
    }

    /// Iterate the indexed collection names in no particular order.
    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Get the count of indexed collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Check if no collection is indexed.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
