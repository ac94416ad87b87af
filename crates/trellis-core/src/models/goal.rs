//! Goal model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Unique identifier for a goal, assigned monotonically by the store and
/// stable for the goal's lifetime.
pub type GoalId = u64;

/// A single trackable goal, root or sub-goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: GoalId,

    /// User-supplied label, trimmed and never empty
    pub text: String,

    /// The goal's own directly-set completion flag.
    ///
    /// For a goal with sub-goals this is *not* the whole story: the goal is
    /// only effectively done once every descendant is effectively done too.
    pub done: bool,

    /// Parent goal, or `None` for a root goal.
    ///
    /// Always references an existing goal after any mutation completes, and
    /// never forms a cycle: sub-goals are only created under an existing
    /// goal, and goals are never re-parented.
    pub parent: Option<GoalId>,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Goal {
    /// Whether this goal is a root (has no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
