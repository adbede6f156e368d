//! # Schema Projector
//!
//! This crate reduces a full [`SchemaOverview`](schema_overview::SchemaOverview)
//! to the collections, fields and relations a permission set authorizes,
//! so that API and introspection layers do not reveal the shape of data a
//! caller may not access.
//!
//! ## Overview
//!
//! - **Permission index**: allowed fields per collection for the requested
//!   actions, `*` granting every field
//! - **Collection reduction**: collections matched by at least one
//!   permission, trimmed to their allowed fields
//! - **Relation filtering**: relations whose source, target, many-to-any
//!   candidates and reverse field are all visible
//!
//! Only metadata visibility is shaped here. Row-level rules carried by
//! permissions are passed through untouched.
//!
//! ## Usage
//!
//! ```rust
//! use schema_overview::SchemaOverview;
//! use schema_projector::reduce_schema;
//! use schema_rbac::{Action, ActionSet};
//!
//! let schema = SchemaOverview::from_json(r#"{
//!     "collections": {
//!         "articles": {
//!             "collection": "articles",
//!             "primary": "id",
//!             "fields": {
//!                 "id": { "field": "id", "type": "integer" },
//!                 "body": { "field": "body", "type": "text" }
//!             }
//!         },
//!         "authors": { "collection": "authors", "primary": "id", "fields": {} }
//!     },
//!     "relations": [
//!         { "collection": "articles", "field": "author", "related_collection": "authors" }
//!     ],
//!     "permissions": [
//!         { "collection": "articles", "action": "read", "fields": ["id"] }
//!     ]
//! }"#).unwrap();
//!
//! let reduced = reduce_schema(&schema, &ActionSet::only(Action::Read));
//! assert_eq!(reduced.collection_names().collect::<Vec<_>>(), vec!["articles"]);
//! assert!(reduced.relations.is_empty());
//! ```
//!
//! ## Concurrency
//!
//! Reduction is a synchronous, pure function of its arguments and may be
//! called from any number of threads on shared schemas.

pub mod config;
pub mod index;
pub mod projector;
pub mod reduce;

// Re-export main types
pub use config::{ConfigError, ProjectorConfig};
pub use index::{AllowedFields, PermissionIndex};
pub use projector::SchemaProjector;
pub use reduce::{filter_relations, reduce_collections, reduce_schema, reduce_schema_all};
