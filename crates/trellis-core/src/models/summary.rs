//! Goal summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Goal, GoalId};

/// Summary information about a goal with sub-goal statistics.
///
/// Counts are in terms of *effective* completion: a sub-goal with its own
/// unfinished children never counts as done in its parent's progress display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSummary {
    /// Goal ID
    pub id: GoalId,
    /// Label of the goal
    pub text: String,
    /// The goal's own directly-set completion flag
    pub done: bool,
    /// Whether the goal (and its entire subtree) is effectively done
    pub effectively_done: bool,
    /// Parent goal, or `None` for a root goal
    pub parent: Option<GoalId>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of direct sub-goals
    pub total_children: u32,
    /// Number of direct sub-goals that are effectively done
    pub completed_children: u32,
}

impl GoalSummary {
    /// Create a `GoalSummary` from a goal and its derived subtree statistics.
    pub fn from_goal(goal: &Goal, effectively_done: bool, completed_children: u32, total_children: u32) -> Self {
        Self {
            id: goal.id,
            text: goal.text.clone(),
            done: goal.done,
            effectively_done,
            parent: goal.parent,
            created_at: goal.created_at,
            total_children,
            completed_children,
        }
    }

    /// Whether this goal has any direct sub-goals.
    pub fn has_children(&self) -> bool {
        self.total_children > 0
    }
}
