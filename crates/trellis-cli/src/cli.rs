//! Command handlers: apply one core operation, persist, render the result.
//!
//! Each handler is the whole lifetime of one mutation from the store's point
//! of view: load happened in `main`, the operation runs synchronously against
//! the in-memory forest, and the snapshot is written back before anything is
//! rendered. A failed operation leaves the data file untouched.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use trellis_core::{
    derive,
    params::{CreateGoal, EditGoal},
    ActiveGoals, CompletedOverview, CreateResult, DeleteResult, GoalStore, GoalTree,
    OperationStatus, UpdateResult,
};

use crate::{renderer::TerminalRenderer, storage};

/// Ties a loaded store to its data file and a renderer.
pub struct Cli {
    store: GoalStore,
    renderer: TerminalRenderer,
    data_file: PathBuf,
}

impl Cli {
    /// Create a CLI around a loaded store.
    pub fn new(store: GoalStore, renderer: TerminalRenderer, data_file: PathBuf) -> Self {
        Self {
            store,
            renderer,
            data_file,
        }
    }

    /// Handle `trellis add`.
    pub fn add(&mut self, params: CreateGoal) -> Result<()> {
        let goal = self.store.add_goal(&params)?;
        self.persist()?;
        self.renderer.render(&CreateResult::new(goal).to_string())
    }

    /// Handle `trellis list` (and the bare `trellis` invocation).
    pub fn list(&self) -> Result<()> {
        let output = format!("# Active Goals\n\n{}", ActiveGoals(&self.store));
        self.renderer.render(&output)
    }

    /// Handle `trellis show <id>`.
    pub fn show(&self, id: u64) -> Result<()> {
        let Some(goal) = self.store.get(id) else {
            bail!("Goal with ID {id} not found");
        };

        let mut output = goal.to_string();
        if self.store.children(id).count() > 0 {
            output.push_str("\n## Sub-goals\n\n");
            output.push_str(&GoalTree::new(&self.store, id).to_string());
        }
        if !goal.done && derive::all_children_effectively_done(&self.store, id) {
            output.push_str("\nReady to be marked done.\n");
        }
        self.renderer.render(&output)
    }

    /// Handle `trellis done <id>`.
    pub fn done(&mut self, id: u64) -> Result<()> {
        let outcome = self.store.mark_done(id)?;
        self.persist()?;

        let result =
            UpdateResult::with_changes(outcome.goal, vec!["Marked done".to_string()]);
        self.renderer.render(&result.to_string())?;

        // The transition signal a celebration collaborator would subscribe
        // to; here it becomes a line of output.
        if outcome.became_complete {
            let status =
                OperationStatus::success(format!("Goal {id} is now complete! 🎉"));
            self.renderer.render(&status.to_string())?;
        }
        Ok(())
    }

    /// Handle `trellis undo <id>`.
    pub fn undo(&mut self, id: u64) -> Result<()> {
        let goal = self.store.undo_goal(id)?;
        self.persist()?;

        let result = UpdateResult::with_changes(
            goal,
            vec![
                "Marked not done".to_string(),
                "Cleared the done flag on every ancestor".to_string(),
            ],
        );
        self.renderer.render(&result.to_string())
    }

    /// Handle `trellis edit <id> <text>`.
    pub fn edit(&mut self, params: EditGoal) -> Result<()> {
        let goal = self.store.edit_goal(&params)?;
        self.persist()?;

        let result = UpdateResult::with_changes(goal, vec!["Updated label".to_string()]);
        self.renderer.render(&result.to_string())
    }

    /// Handle `trellis delete <id>`.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let removed = self.store.delete_goal(id);
        if removed > 0 {
            self.persist()?;
        }
        self.renderer
            .render(&DeleteResult { id, removed }.to_string())
    }

    /// Handle `trellis completed`.
    pub fn completed(&self) -> Result<()> {
        let output = format!("# Completed Goals\n\n{}", CompletedOverview(&self.store));
        self.renderer.render(&output)
    }

    fn persist(&self) -> Result<()> {
        storage::save(&self.data_file, &self.store)
            .context("Failed to save goals")
    }
}
