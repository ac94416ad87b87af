//! Parameter structures for Trellis operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future UIs) without framework-specific derives
//! or dependencies. Interface layers wrap these with their own derives (clap
//! arguments, etc.) and convert via `From` impls, keeping the core free of
//! framework concerns.

use serde::{Deserialize, Serialize};

use crate::models::GoalId;

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like mark_done, undo_goal, delete_goal, and show.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the goal to operate on
    pub id: GoalId,
}

/// Parameters for creating a new goal.
///
/// A goal is created as a root when `parent` is `None`, or as a sub-goal of
/// an existing goal otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGoal {
    /// Label of the goal (required; trimmed before storage)
    pub text: String,
    /// Optional parent goal to attach the new goal under
    pub parent: Option<GoalId>,
}

/// Parameters for editing a goal's label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditGoal {
    /// The ID of the goal to edit
    pub id: GoalId,
    /// Replacement label (required; trimmed before storage)
    pub text: String,
}
