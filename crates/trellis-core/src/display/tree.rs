//! Subtree and forest rendering.
//!
//! These wrappers borrow the store so they can reflect *effective*
//! completion and per-parent progress, which a bare goal cannot report about
//! itself.

use std::fmt;

use crate::{derive, models::GoalId, store::GoalStore};

use super::models::completion_icon;

/// Renders one goal and its whole subtree as an indented markdown list.
///
/// Each line carries the effective-completion icon and, for goals with
/// sub-goals, a `done/total` progress indicator.
pub struct GoalTree<'a> {
    store: &'a GoalStore,
    root: GoalId,
}

impl<'a> GoalTree<'a> {
    /// Create a tree view rooted at `root`.
    pub fn new(store: &'a GoalStore, root: GoalId) -> Self {
        Self { store, root }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: GoalId, depth: usize) -> fmt::Result {
        let Some(goal) = self.store.get(id) else {
            return Ok(());
        };

        let icon = completion_icon(derive::is_effectively_done(self.store, goal));
        let progress = derive::completion_progress(self.store, id);
        let suffix = if progress.total > 0 {
            format!(" ({}/{})", progress.done, progress.total)
        } else {
            String::new()
        };
        writeln!(
            f,
            "{}- {icon} {} [{}]{suffix}",
            "    ".repeat(depth),
            goal.text,
            goal.id
        )?;

        for child in self.store.children(id) {
            self.fmt_subtree(f, child.id, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for GoalTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root, 0)
    }
}

/// Renders the root goals that are not yet effectively done, each with its
/// subtree. Handles the empty case gracefully.
pub struct ActiveGoals<'a>(pub &'a GoalStore);

impl fmt::Display for ActiveGoals<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active: Vec<GoalId> = self
            .0
            .roots()
            .filter(|goal| !derive::is_effectively_done(self.0, goal))
            .map(|goal| goal.id)
            .collect();

        if active.is_empty() {
            return writeln!(f, "No active goals.");
        }
        for id in active {
            write!(f, "{}", GoalTree::new(self.0, id))?;
        }
        Ok(())
    }
}

/// Renders the effectively-done root goals with aggregate statistics, the
/// way the completed-goals dialog presents them.
pub struct CompletedOverview<'a>(pub &'a GoalStore);

impl fmt::Display for CompletedOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let completed: Vec<&crate::models::Goal> = self
            .0
            .roots()
            .filter(|goal| derive::is_effectively_done(self.0, goal))
            .collect();

        if completed.is_empty() {
            return writeln!(f, "No completed goals yet.");
        }

        let total = derive::total_completed_count(self.0, completed.iter().copied());
        write!(f, "{} completed goal(s)", completed.len())?;
        if total > completed.len() {
            write!(f, " ({total} total with sub-goals)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for goal in completed {
            write!(f, "{}", GoalTree::new(self.0, goal.id))?;
        }
        Ok(())
    }
}
