//! Schema projector service.

use schema_overview::SchemaOverview;
use schema_rbac::ActionSet;

use crate::config::ProjectorConfig;
use crate::reduce::reduce_schema;

/// Reduces schemas using configured default actions.
///
/// # Example
///
/// ```
/// use schema_overview::{Collection, Relation, SchemaOverview};
/// use schema_projector::{ProjectorConfig, SchemaProjector};
/// use schema_rbac::{Action, Permission};
///
/// let schema = SchemaOverview::new(
///     [Collection::new("articles", "id"), Collection::new("authors", "id")],
///     Vec::<Relation>::new(),
///     vec![
///         Permission::new("articles", Action::Read),
///         Permission::new("authors", Action::Update),
///     ],
/// );
///
/// let projector = SchemaProjector::new(ProjectorConfig::default().with_default_actions([Action::Read]));
/// let reduced = projector.reduce(&schema);
/// assert!(reduced.collection("articles").is_some());
/// assert!(reduced.collection("authors").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaProjector {
    config: ProjectorConfig,
}

impl SchemaProjector {
    /// Create a projector.
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Reduce `schema` for the configured default actions.
    pub fn reduce(&self, schema: &SchemaOverview) -> SchemaOverview {
        reduce_schema(schema, &self.config.default_actions)
    }

    /// Reduce `schema` for an explicit set of actions.
    pub fn reduce_for(&self, schema: &SchemaOverview, actions: &ActionSet) -> SchemaOverview {
        reduce_schema(schema, actions)
    }
}
