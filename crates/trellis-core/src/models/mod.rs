//! Data models for goals.
//!
//! This module contains the core domain model of the Trellis goal tracker: a
//! forest of [`Goal`] records related only through `parent` references.
//! Display implementations for these models live in [`crate::display::models`]
//! to keep data structures separate from presentation logic.
//!
//! A goal's `done` flag is the *directly-set* completion state. Whether a goal
//! is "effectively done" (its own flag plus its entire subtree) is never
//! stored on the model; it is derived on demand by [`crate::derive`].

pub mod goal;
pub mod summary;

#[cfg(test)]
mod tests;

pub use goal::{Goal, GoalId};
pub use summary::GoalSummary;
