//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers give create, update, and delete operations consistent
//! messaging plus the affected resource's details.

use std::fmt;

use crate::models::{Goal, GoalId};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new `CreateResult` wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created goal with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing the specific changes that were made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new `UpdateResult` wrapper without change tracking.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create a new `UpdateResult` wrapper with a list of changes.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated goal {}", self.resource.id)?;
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of cascade-delete operations.
pub struct DeleteResult {
    pub id: GoalId,
    /// Goals removed, including the target itself; 0 when the id was absent.
    pub removed: usize,
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed {
            0 => writeln!(f, "Goal {} does not exist; nothing deleted.", self.id),
            1 => writeln!(f, "Deleted goal {}.", self.id),
            n => writeln!(
                f,
                "Deleted goal {} and {} sub-goal(s).",
                self.id,
                n - 1
            ),
        }
    }
}
