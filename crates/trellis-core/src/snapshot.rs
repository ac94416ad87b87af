//! Lossless snapshot serialization of the goal forest.
//!
//! The store itself is purely in-memory; any durable save/load lives with an
//! external collaborator. This module fixes the contract that collaborator
//! depends on: the forest serializes as an ordered list of flat goal records,
//! and round-tripping that list reproduces an identical forest (same ids,
//! texts, flags, parent links, and insertion order).
//!
//! Loading validates referential integrity. A record whose parent is missing
//! from the snapshot, a duplicate id, or a parent cycle is rejected as
//! [`GoalError::Corrupt`] rather than admitted into a store whose invariants
//! it would violate.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GoalError, Result},
    models::{Goal, GoalId},
    store::GoalStore,
};

/// One goal, flattened for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalRecord {
    /// Goal ID
    pub id: GoalId,
    /// Label of the goal
    pub text: String,
    /// The goal's own directly-set completion flag
    pub done: bool,
    /// Parent goal, or `None` for a root
    pub parent: Option<GoalId>,
    /// Creation timestamp (UTC)
    pub created_at: Timestamp,
    /// Last-modification timestamp (UTC)
    pub updated_at: Timestamp,
}

impl From<&Goal> for GoalRecord {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            text: goal.text.clone(),
            done: goal.done,
            parent: goal.parent,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl From<GoalRecord> for Goal {
    fn from(record: GoalRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            done: record.done,
            parent: record.parent,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// An ordered list of goal records; the unit of persistence.
///
/// Record order is insertion order, which is what root and sub-goal display
/// order is derived from. It carries no other meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Snapshot(pub Vec<GoalRecord>);

impl Snapshot {
    /// Encodes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Serialization`] if the input is not a valid
    /// record list.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GoalStore {
    /// Captures the current forest as an ordered record list.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.iter().map(GoalRecord::from).collect())
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// ID assignment resumes above the highest id in the snapshot, so ids
    /// stay collision-free across round-trips.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Corrupt`] if the snapshot contains a duplicate
    /// id, a parent reference to a missing goal, or a parent cycle.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let goals: Vec<Goal> = snapshot.0.into_iter().map(Goal::from).collect();
        validate(&goals)?;

        let next_id = goals.iter().map(|goal| goal.id).max().unwrap_or(0) + 1;
        Ok(Self::from_parts(goals, next_id))
    }
}

fn validate(goals: &[Goal]) -> Result<()> {
    for goal in goals {
        if goals.iter().filter(|other| other.id == goal.id).count() > 1 {
            return Err(GoalError::corrupt(format!("duplicate goal id {}", goal.id)));
        }
        if let Some(parent_id) = goal.parent {
            if !goals.iter().any(|other| other.id == parent_id) {
                return Err(GoalError::corrupt(format!(
                    "goal {} references missing parent {parent_id}",
                    goal.id
                )));
            }
        }
    }

    // Cycle check: more parent hops than goals means a loop.
    for goal in goals {
        let mut hops = 0;
        let mut next = goal.parent;
        while let Some(parent_id) = next {
            hops += 1;
            if hops > goals.len() {
                return Err(GoalError::corrupt(format!(
                    "parent cycle involving goal {}",
                    goal.id
                )));
            }
            next = goals
                .iter()
                .find(|other| other.id == parent_id)
                .and_then(|other| other.parent);
        }
    }
    Ok(())
}
