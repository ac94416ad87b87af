//! Core library for the Trellis personal-goal tracker.
//!
//! Trellis organizes goals in a forest: any goal may carry sub-goals, and a
//! goal is "effectively done" only once its own flag is set *and* every
//! descendant is effectively done. This crate owns that state engine: the
//! flat data model, the pure derivation of effective completion, the two
//! cascades (downward delete, upward undo), and the mutation operations that
//! preserve the forest's invariants.
//!
//! Presentation and persistence are external collaborators. The store holds
//! goals in memory; [`snapshot`] fixes the lossless serialization contract a
//! persistence collaborator must round-trip, and [`display`] provides the
//! markdown formatting the bundled CLI renders.
//!
//! # Quick Start
//!
//! ```rust
//! use trellis_core::{params::CreateGoal, GoalStore};
//!
//! # fn example() -> trellis_core::Result<()> {
//! let mut store = GoalStore::new();
//!
//! let goal = store.add_goal(&CreateGoal {
//!     text: "Run a triathlon".to_string(),
//!     parent: None,
//! })?;
//! let swim = store.add_goal(&CreateGoal {
//!     text: "Swim training".to_string(),
//!     parent: Some(goal.id),
//! })?;
//!
//! // Completing the sub-goal does not complete the parent; the parent
//! // needs its own mark_done once all children are effectively done.
//! let outcome = store.mark_done(swim.id)?;
//! assert!(outcome.became_complete);
//! assert!(!trellis_core::derive::is_effectively_done(
//!     &store,
//!     store.get(goal.id).unwrap()
//! ));
//! # Ok(())
//! # }
//! ```

pub mod cascade;
pub mod derive;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod snapshot;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use display::{
    ActiveGoals, CompletedOverview, CreateResult, DeleteResult, GoalTree, LocalDateTime,
    OperationStatus, UpdateResult,
};
pub use error::{GoalError, Result};
pub use models::{Goal, GoalId, GoalSummary};
pub use params::{CreateGoal, EditGoal, Id};
pub use snapshot::{GoalRecord, Snapshot};
pub use store::{GoalStore, MarkDone};
pub use view::{Dialog, ViewState};
