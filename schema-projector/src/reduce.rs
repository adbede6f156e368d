//! # Schema Reduction
//!
//! Produces the part of a [`SchemaOverview`] a permission set may see:
//!
//! 1. [`PermissionIndex::build`] collects the allowed fields per collection.
//! 2. [`reduce_collections`] keeps permission-matched collections and their
//!    allowed fields.
//! 3. [`filter_relations`] keeps relations whose every endpoint is visible.
//!
//! The input is never modified. The output shares field, relation and
//! permission payloads with the input through [`Arc`].

use std::collections::BTreeMap;
use std::sync::Arc;

use schema_overview::{Collection, Relation, SchemaOverview};
use schema_rbac::ActionSet;
use tracing::{debug, instrument};

use crate::index::PermissionIndex;

/// Reduce `schema` to what its permissions authorize for `actions`.
///
/// Permissions are passed through unfiltered; the returned schema points at
/// the same permission list as the input.
///
/// # Example
///
/// ```
/// use schema_overview::{Collection, Field, Relation, SchemaOverview};
/// use schema_projector::reduce_schema;
/// use schema_rbac::{Action, ActionSet, Permission};
///
/// let schema = SchemaOverview::new(
///     [Collection::new("articles", "id")
///         .with_field(Field::new("id", "integer"))
///         .with_field(Field::new("body", "text"))],
///     Vec::<Relation>::new(),
///     vec![Permission::with_fields("articles", Action::Read, ["id"])],
/// );
///
/// let reduced = reduce_schema(&schema, &ActionSet::only(Action::Read));
/// let articles = reduced.collection("articles").unwrap();
/// assert!(articles.has_field("id"));
/// assert!(!articles.has_field("body"));
/// ```
#[instrument(level = "debug", skip_all, fields(actions = %actions))]
pub fn reduce_schema(schema: &SchemaOverview, actions: &ActionSet) -> SchemaOverview {
    let index = PermissionIndex::build(&schema.permissions, actions);
    let collections = reduce_collections(schema, actions, &index);
    let relations = filter_relations(&schema.relations, &index);

    debug!(
        collections_in = schema.collections.len(),
        collections_out = collections.len(),
        relations_in = schema.relations.len(),
        relations_out = relations.len(),
        "Reduced schema"
    );

    SchemaOverview {
        collections,
        relations,
        permissions: Arc::clone(&schema.permissions),
    }
}

/// [`reduce_schema`] over all four actions.
pub fn reduce_schema_all(schema: &SchemaOverview) -> SchemaOverview {
    reduce_schema(schema, &ActionSet::all())
}

/// Keep the collections some permission matches for `actions`.
///
/// A matched collection keeps only the fields its `index` entry allows and
/// may end up with no fields at all. Unmatched collections are dropped.
pub fn reduce_collections(
    schema: &SchemaOverview,
    actions: &ActionSet,
    index: &PermissionIndex,
) -> BTreeMap<String, Collection> {
    let mut reduced = BTreeMap::new();

    for (name, collection) in &schema.collections {
        let matched = schema
            .permissions
            .iter()
            .any(|permission| permission.applies_to(name, actions));
        if !matched {
            continue;
        }

        let fields = collection
            .fields
            .iter()
            .filter(|(field, _)| index.allows_field(name, field))
            .map(|(field, payload)| (field.clone(), Arc::clone(payload)))
            .collect();

        reduced.insert(name.clone(), collection.with_fields(fields));
    }

    reduced
}

/// Keep the relations whose collections and fields are all visible.
///
/// Relative order is preserved.
pub fn filter_relations(relations: &[Arc<Relation>], index: &PermissionIndex) -> Vec<Arc<Relation>> {
    relations
        .iter()
        .filter(|relation| collections_allowed(relation, index) && fields_allowed(relation, index))
        .cloned()
        .collect()
}

/// Every collection the relation can reach must be indexed. A many-to-any
/// relation is hidden unless all of its allowed targets are visible.
fn collections_allowed(relation: &Relation, index: &PermissionIndex) -> bool {
    if !index.contains_collection(&relation.collection) {
        return false;
    }

    if let Some(related) = &relation.related_collection {
        if !index.contains_collection(related) {
            return false;
        }
    }

    if let Some(allowed) = relation.one_allowed_collections() {
        if !allowed.iter().all(|collection| index.contains_collection(collection)) {
            return false;
        }
    }

    true
}

/// The source field, and the reverse field when there is one, must be granted.
fn fields_allowed(relation: &Relation, index: &PermissionIndex) -> bool {
    if !index.allows_field(&relation.collection, &relation.field) {
        return false;
    }

    if let (Some(related), Some(one_field)) = (&relation.related_collection, relation.one_field()) {
        if !index.allows_field(related, one_field) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_overview::{Field, RelationMeta};
    use schema_rbac::{Action, Permission};

    fn relation(collection: &str, field: &str, related: Option<&str>) -> Arc<Relation> {
        Arc::new(Relation::new(collection, field, related))
    }

    fn index(permissions: &[Permission]) -> PermissionIndex {
        PermissionIndex::build(permissions, &ActionSet::all())
    }

    #[test]
    fn test_collections_allowed_requires_source_and_target() {
        let idx = index(&[Permission::all_fields("articles", Action::Read)]);
        assert!(collections_allowed(&Relation::new("articles", "author", None), &idx));
        assert!(!collections_allowed(&Relation::new("articles", "author", Some("authors")), &idx));
        assert!(!collections_allowed(&Relation::new("authors", "avatar", None), &idx));
    }

    #[test]
    fn test_many_to_any_requires_every_target() {
        let m2a = Relation::new("comments", "item", None).with_meta(RelationMeta {
            one_allowed_collections: Some(vec!["articles".to_string(), "pages".to_string()]),
            ..RelationMeta::default()
        });

        let partial = index(&[
            Permission::all_fields("comments", Action::Read),
            Permission::all_fields("articles", Action::Read),
        ]);
        assert!(!collections_allowed(&m2a, &partial));

        let full = index(&[
            Permission::all_fields("comments", Action::Read),
            Permission::all_fields("articles", Action::Read),
            Permission::new("pages", Action::Read),
        ]);
        assert!(collections_allowed(&m2a, &full));
    }

    #[test]
    fn test_empty_allowed_collections_list_does_not_block() {
        let m2a = Relation::new("comments", "item", None).with_meta(RelationMeta {
            one_allowed_collections: Some(Vec::new()),
            ..RelationMeta::default()
        });
        let idx = index(&[Permission::with_fields("comments", Action::Read, ["item"])]);
        assert!(collections_allowed(&m2a, &idx));
        assert!(fields_allowed(&m2a, &idx));
    }

    #[test]
    fn test_fields_allowed_checks_reverse_field() {
        let o2m = Relation::new("articles", "author", Some("authors")).with_meta(RelationMeta {
            one_field: Some("articles".to_string()),
            ..RelationMeta::default()
        });

        let without_reverse = index(&[
            Permission::with_fields("articles", Action::Read, ["author"]),
            Permission::with_fields("authors", Action::Read, ["id"]),
        ]);
        assert!(!fields_allowed(&o2m, &without_reverse));

        let with_reverse = index(&[
            Permission::with_fields("articles", Action::Read, ["author"]),
            Permission::with_fields("authors", Action::Read, ["articles"]),
        ]);
        assert!(fields_allowed(&o2m, &with_reverse));
    }

    #[test]
    fn test_reverse_field_ignored_without_related_collection() {
        let relation = Relation::new("comments", "item", None).with_meta(RelationMeta {
            one_field: Some("comments".to_string()),
            ..RelationMeta::default()
        });
        let idx = index(&[Permission::with_fields("comments", Action::Read, ["item"])]);
        assert!(fields_allowed(&relation, &idx));
    }

    #[test]
    fn test_unindexed_source_collection_is_blocked() {
        let idx = index(&[Permission::all_fields("authors", Action::Read)]);
        assert!(!fields_allowed(&Relation::new("articles", "author", Some("authors")), &idx));
    }

    #[test]
    fn test_filter_relations_preserves_order() {
        let relations = vec![
            relation("articles", "author", Some("authors")),
            relation("articles", "editor", Some("editors")),
            relation("authors", "avatar", Some("files")),
            relation("articles", "reviewer", Some("authors")),
        ];
        let idx = index(&[
            Permission::all_fields("articles", Action::Read),
            Permission::all_fields("authors", Action::Read),
        ]);

        let kept = filter_relations(&relations, &idx);
        assert_eq!(kept.len(), 2);
        assert!(Arc::ptr_eq(&kept[0], &relations[0]));
        assert!(Arc::ptr_eq(&kept[1], &relations[3]));
    }

    #[test]
    fn test_reduce_collections_rescans_permissions() {
        let schema = SchemaOverview::new(
            [
                Collection::new("articles", "id").with_field(Field::new("id", "integer")),
                Collection::new("authors", "id").with_field(Field::new("id", "integer")),
            ],
            Vec::<Relation>::new(),
            vec![
                Permission::new("articles", Action::Read),
                Permission::all_fields("authors", Action::Delete),
            ],
        );
        let actions = ActionSet::only(Action::Read);
        let idx = PermissionIndex::build(&schema.permissions, &actions);

        let reduced = reduce_collections(&schema, &actions, &idx);
        assert_eq!(reduced.len(), 1);
        assert!(reduced["articles"].fields.is_empty());
    }

    #[test]
    fn test_reduce_schema_shares_permissions() {
        let schema = SchemaOverview::new(
            [Collection::new("articles", "id")],
            Vec::<Relation>::new(),
            vec![Permission::all_fields("articles", Action::Update)],
        );

        let reduced = reduce_schema(&schema, &ActionSet::only(Action::Read));
        assert!(reduced.collections.is_empty());
        assert!(Arc::ptr_eq(&reduced.permissions, &schema.permissions));

        let all = reduce_schema_all(&schema);
        assert!(all.collection("articles").is_some());
    }
}
