//! # Schema Overview
//!
//! This crate provides the data model description consumed and produced by
//! the schema projector.
//!
//! ## Overview
//!
//! The schema-overview crate handles:
//! - **Collections**: Named, table-like entities and their fields
//! - **Fields**: Column-like attributes, passed through as opaque payloads
//! - **Relations**: Edges between collections, including many-to-any and
//!   reverse (O2M) fields
//! - **Loading**: Decoding and validating schema documents at the boundary
//!
//! ## Usage
//!
//! ```rust
//! use schema_overview::SchemaOverview;
//!
//! let schema = SchemaOverview::from_json(r#"{
//!     "collections": {
//!         "articles": {
//!             "collection": "articles",
//!             "primary": "id",
//!             "fields": { "id": { "field": "id", "type": "integer" } }
//!         }
//!     },
//!     "relations": [],
//!     "permissions": [{ "collection": "articles", "action": "read", "fields": ["*"] }]
//! }"#).unwrap();
//!
//! assert!(schema.collection("articles").is_some());
//! ```

pub mod collection;
pub mod error;
pub mod field;
pub mod overview;
pub mod relation;

// Re-export main types
pub use collection::{Accountability, Collection};
pub use error::{SchemaError, SchemaResult};
pub use field::Field;
pub use overview::SchemaOverview;
pub use relation::{DeselectAction, Relation, RelationMeta};
