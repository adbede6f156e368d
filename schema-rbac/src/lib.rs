//! # Schema RBAC
//!
//! This crate provides the permission model consumed by the schema
//! projector.
//!
//! ## Overview
//!
//! The schema-rbac crate handles:
//! - **Actions**: The CRUD operations a permission is scoped to
//! - **Action Sets**: Which actions a projection takes into account
//! - **Permissions**: Collection + Action [+ allowed fields]
//!
//! ## Architecture
//!
//! ```text
//! Permission = Collection + Action [+ Fields]
//!
//! Examples:
//!   articles:read [id, title]   - Read two fields of articles
//!   articles:read [*]           - Read every field of articles
//!   articles:delete             - Delete articles, no field grants
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schema_rbac::{Action, ActionSet, Permission};
//!
//! let perm = Permission::with_fields("articles", Action::Read, ["id", "title"]);
//! assert!(perm.applies_to("articles", &ActionSet::only(Action::Read)));
//! assert!(!perm.applies_to("articles", &ActionSet::only(Action::Update)));
//! ```

pub mod actions;
pub mod error;
pub mod permissions;

// Re-export main types for convenience
pub use actions::{Action, ActionSet};
pub use error::ParseActionError;
pub use permissions::{Permission, WILDCARD};
