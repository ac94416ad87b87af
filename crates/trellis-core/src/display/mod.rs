//! Display formatting for goals and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly for standalone
//! markdown output, while the wrapper types here format collections, whole
//! subtrees, and operation outcomes. All formatters produce markdown so the
//! same output renders richly in a terminal or passes through as plain text.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for [`crate::models`] types
//! - [`tree`]: Subtree and forest rendering (`GoalTree`, `ActiveGoals`,
//!   `CompletedOverview`)
//! - [`results`]: Operation result types (`CreateResult`, `UpdateResult`,
//!   `DeleteResult`)
//! - [`status`]: Status and confirmation messages (`OperationStatus`)
//! - [`datetime`]: Timestamp formatting utilities

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod tree;

pub use datetime::LocalDateTime;
pub use models::completion_icon;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
pub use tree::{ActiveGoals, CompletedOverview, GoalTree};
