//! Projector configuration.
//!
//! Configuration is loaded from environment variables with a default that
//! takes every action into account.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use schema_rbac::ActionSet;

/// Environment variable holding the default action list.
pub const ACTIONS_ENV: &str = "SCHEMA_PROJECTOR_ACTIONS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Settings for a [`SchemaProjector`](crate::SchemaProjector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Actions considered when the caller does not name any.
    #[serde(default)]
    pub default_actions: ActionSet,
}

impl Default for ProjectorConfig {
    /// Considers create, read, update and delete permissions.
    fn default() -> Self {
        Self {
            default_actions: ActionSet::all(),
        }
    }
}

impl ProjectorConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCHEMA_PROJECTOR_ACTIONS`: Comma-separated default actions
    ///   (default: create,read,update,delete)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let default_actions = match lookup(ACTIONS_ENV) {
            Some(raw) => ActionSet::parse_list(&raw).map_err(|e| ConfigError::InvalidValue {
                key: ACTIONS_ENV.to_string(),
                message: e.to_string(),
            })?,
            None => default.default_actions,
        };

        debug!(default_actions = %default_actions, "Loaded projector configuration");

        Ok(Self { default_actions })
    }

    /// Set the default actions.
    pub fn with_default_actions(mut self, actions: impl Into<ActionSet>) -> Self {
        self.default_actions = actions.into();
        self
    }
}
