//! # Actions
//!
//! Defines the CRUD actions a permission can be scoped to, and the
//! [`ActionSet`] used to select which permissions count during projection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseActionError;

/// Actions that can be performed on a collection.
///
/// - **Create**: Insert new items
/// - **Read**: View item data
/// - **Update**: Modify existing items
/// - **Delete**: Remove items
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create new items in a collection.
    Create,

    /// Read/view items of a collection.
    Read,

    /// Update existing items.
    Update,

    /// Delete items.
    Delete,
}

impl Action {
    /// Get the string representation of the action.
    ///
    /// # Returns
    ///
    /// A static string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use schema_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse(" DELETE "), Some(Action::Delete));
    /// assert_eq!(Action::parse("share"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }

    /// Get all actions, in create/read/update/delete order.
    pub fn all() -> [Self; 4] {
        [Action::Create, Action::Read, Action::Update, Action::Delete]
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::Read)
    }

    /// Check if this action creates, modifies or removes data.
    pub fn is_write(&self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s).ok_or_else(|| ParseActionError::UnknownAction(s.trim().to_string()))
    }
}

/// An unordered set of actions.
///
/// The default set contains all four actions, matching the "consider every
/// permission" behavior of a projection without an explicit action filter.
///
/// # Example
///
/// ```
/// use schema_rbac::{Action, ActionSet};
///
/// let reads = ActionSet::only(Action::Read);
/// assert!(reads.contains(Action::Read));
/// assert!(!reads.contains(Action::Update));
///
/// let parsed = ActionSet::parse_list("read, update").unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(ActionSet::default().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet {
    actions: HashSet<Action>,
}

impl ActionSet {
    /// Create an empty action set.
    pub fn new() -> Self {
        Self {
            actions: HashSet::new(),
        }
    }

    /// Create a set containing every action.
    pub fn all() -> Self {
        Action::all().into_iter().collect()
    }

    /// Create a set containing a single action.
    pub fn only(action: Action) -> Self {
        let mut set = Self::new();
        set.insert(action);
        set
    }

    /// Add an action to the set.
    ///
    /// # Returns
    ///
    /// `true` if the action was not already present
    pub fn insert(&mut self, action: Action) -> bool {
        self.actions.insert(action)
    }

    /// Check if the set contains an action.
    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Get the count of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate the actions in create/read/update/delete order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::all().into_iter().filter(|action| self.contains(*action))
    }

    /// Parse a comma-separated list such as `"read, update"`.
    ///
    /// Items are trimmed and empty items are skipped, so an empty string
    /// yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseActionError::UnknownAction`] for the first item that
    /// is not a known action.
    pub fn parse_list(s: &str) -> Result<Self, ParseActionError> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<Action>)
            .collect()
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Action; N]> for ActionSet {
    fn from(actions: [Action; N]) -> Self {
        actions.into_iter().collect()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|action| action.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
