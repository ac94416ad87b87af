//! Queryable dialog state.
//!
//! The original application keeps its modal visibility flags next to the
//! goal data, and consumers expect to query them from the same place, so the
//! store carries this small state machine. At most one dialog is open at a
//! time. Rendering the dialogs, echoing input text, and so on remain the
//! presentation layer's business.

use crate::models::GoalId;

/// A dialog the presentation layer may have open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The add-goal dialog, optionally targeted at a parent goal
    Add { parent: Option<GoalId> },
    /// The edit dialog for an existing goal
    Edit { id: GoalId },
    /// The completed-goals list
    Completed,
}

/// Tracks which dialog, if any, is currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    open: Option<Dialog>,
}

impl ViewState {
    /// The currently open dialog, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        self.open
    }

    /// Opens the add dialog, optionally targeting a parent for a sub-goal.
    pub fn open_add(&mut self, parent: Option<GoalId>) {
        self.open = Some(Dialog::Add { parent });
    }

    /// Opens the edit dialog for a goal.
    pub fn open_edit(&mut self, id: GoalId) {
        self.open = Some(Dialog::Edit { id });
    }

    /// Opens the completed-goals list.
    pub fn open_completed(&mut self) {
        self.open = Some(Dialog::Completed);
    }

    /// Closes any open dialog.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Whether the add dialog is open.
    pub fn is_add_open(&self) -> bool {
        matches!(self.open, Some(Dialog::Add { .. }))
    }

    /// Whether the edit dialog is open.
    pub fn is_edit_open(&self) -> bool {
        matches!(self.open, Some(Dialog::Edit { .. }))
    }

    /// Whether the completed-goals list is open.
    pub fn is_completed_open(&self) -> bool {
        self.open == Some(Dialog::Completed)
    }

    /// The parent targeted by an open add dialog, if any.
    pub fn pending_parent(&self) -> Option<GoalId> {
        match self.open {
            Some(Dialog::Add { parent }) => parent,
            _ => None,
        }
    }

    /// The goal targeted by an open edit dialog, if any.
    pub fn editing(&self) -> Option<GoalId> {
        match self.open {
            Some(Dialog::Edit { id }) => Some(id),
            _ => None,
        }
    }

    /// Closes any dialog that targets one of the removed goals.
    ///
    /// Called by the store after a cascade-delete so the dialog state never
    /// references an id that no longer exists.
    pub(crate) fn forget(&mut self, removed: &[GoalId]) {
        let stale = match self.open {
            Some(Dialog::Add { parent: Some(id) }) | Some(Dialog::Edit { id }) => {
                removed.contains(&id)
            }
            _ => false,
        };
        if stale {
            self.open = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dialog_at_a_time() {
        let mut view = ViewState::default();
        view.open_add(None);
        assert!(view.is_add_open());

        view.open_completed();
        assert!(view.is_completed_open());
        assert!(!view.is_add_open());

        view.close();
        assert_eq!(view.dialog(), None);
    }

    #[test]
    fn targets_are_queryable() {
        let mut view = ViewState::default();
        view.open_add(Some(7));
        assert_eq!(view.pending_parent(), Some(7));

        view.open_edit(3);
        assert_eq!(view.editing(), Some(3));
        assert_eq!(view.pending_parent(), None);
    }

    #[test]
    fn forget_closes_stale_targets_only() {
        let mut view = ViewState::default();
        view.open_edit(3);
        view.forget(&[1, 2]);
        assert!(view.is_edit_open());

        view.forget(&[3]);
        assert_eq!(view.dialog(), None);

        view.open_completed();
        view.forget(&[3]);
        assert!(view.is_completed_open());
    }
}
