//! The goal store: canonical owner of the forest.
//!
//! [`GoalStore`] holds every goal in one flat, insertion-ordered collection.
//! Parent/child relationships are derived by scanning `parent` references,
//! never kept as embedded child lists, so there is no second structure to
//! fall out of sync. All mutation enters through the methods here; each
//! operation runs to completion under `&mut self`, so an observer never sees
//! a forest mid-cascade. Every operation is total: it either applies fully or
//! rejects the input and leaves the forest unchanged.

use jiff::Timestamp;
use log::debug;

use crate::{
    cascade, derive,
    error::{GoalError, Result},
    models::{Goal, GoalId},
    params::{CreateGoal, EditGoal},
    view::ViewState,
};

/// Outcome of [`GoalStore::mark_done`].
#[derive(Debug, Clone)]
pub struct MarkDone {
    /// The goal after its own flag was set
    pub goal: Goal,
    /// True exactly when the goal's *effective* completion transitioned from
    /// false to true with this call. This is the signal a celebration
    /// collaborator listens for; it never fires for a goal that was already
    /// effectively complete.
    pub became_complete: bool,
}

/// Owner of the goal forest.
///
/// IDs are assigned monotonically and never reused within the store's
/// lifetime, including across snapshot round-trips.
#[derive(Debug)]
pub struct GoalStore {
    goals: Vec<Goal>,
    next_id: GoalId,
    view: ViewState,
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            next_id: 1,
            view: ViewState::default(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Looks up a goal by id.
    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Whether a goal with the given id exists.
    pub fn contains(&self, id: GoalId) -> bool {
        self.get(id).is_some()
    }

    /// All goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> + '_ {
        self.goals.iter()
    }

    /// Root goals in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &Goal> + '_ {
        self.goals.iter().filter(|goal| goal.parent.is_none())
    }

    /// Direct sub-goals of `id` in insertion order.
    pub fn children(&self, id: GoalId) -> impl Iterator<Item = &Goal> + '_ {
        self.goals
            .iter()
            .filter(move |goal| goal.parent == Some(id))
    }

    /// Number of goals in the forest.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// The dialog state colocated with the store.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable access to the dialog state.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adds a new goal, as a root or under an existing parent.
    ///
    /// The label is trimmed before storage. New goals start with
    /// `done=false` and are appended in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Validation`] if the trimmed label is empty, and
    /// [`GoalError::GoalNotFound`] if a parent id is supplied but absent. In
    /// both cases the forest is unchanged.
    pub fn add_goal(&mut self, params: &CreateGoal) -> Result<Goal> {
        let text = params.text.trim();
        if text.is_empty() {
            return Err(GoalError::validation("text")
                .with_reason("Goal label must not be empty or whitespace-only"));
        }
        if let Some(parent_id) = params.parent {
            if !self.contains(parent_id) {
                return Err(GoalError::not_found(parent_id));
            }
        }

        let now = Timestamp::now();
        let goal = Goal {
            id: self.next_id,
            text: text.to_string(),
            done: false,
            parent: params.parent,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.goals.push(goal.clone());
        debug!("added goal {} under {:?}", goal.id, goal.parent);
        Ok(goal)
    }

    /// Deletes a goal together with its entire descendant subtree.
    ///
    /// The full closure is removed in one step, so no observer can see an
    /// orphan whose ancestor is already gone. Deleting an absent id is a
    /// no-op, not an error; deletion is safely retriable. Returns the number
    /// of goals removed.
    pub fn delete_goal(&mut self, id: GoalId) -> usize {
        let closure = cascade::descendant_closure(self, id);
        if closure.is_empty() {
            debug!("delete of absent goal {id} ignored");
            return 0;
        }
        self.goals.retain(|goal| !closure.contains(&goal.id));
        self.view.forget(&closure);
        debug!("deleted goal {id} and {} descendant(s)", closure.len() - 1);
        closure.len()
    }

    /// Sets a goal's own `done` flag.
    ///
    /// No cascade runs in either direction: ancestors learn about the change
    /// through the live derivation in [`crate::derive`], and a parent only
    /// completes via its own explicit `mark_done` call. The returned outcome
    /// reports whether the goal's effective completion transitioned from
    /// false to true.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::GoalNotFound`] if the id is absent.
    pub fn mark_done(&mut self, id: GoalId) -> Result<MarkDone> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(GoalError::GoalNotFound { id })?;

        let was_complete = derive::is_effectively_done(self, &self.goals[index]);
        self.goals[index].done = true;
        self.goals[index].updated_at = Timestamp::now();

        let became_complete =
            !was_complete && derive::is_effectively_done(self, &self.goals[index]);
        debug!("marked goal {id} done (became_complete: {became_complete})");
        Ok(MarkDone {
            goal: self.goals[index].clone(),
            became_complete,
        })
    }

    /// Clears a goal's `done` flag and cascades the undo upward.
    ///
    /// Every ancestor's own flag is cleared as well: an ancestor's `done` is
    /// a claim about its entire subtree, and leaving it set with an
    /// incomplete descendant underneath would resurface as a surprise
    /// "already done" state if that descendant were later deleted.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::GoalNotFound`] if the id is absent.
    pub fn undo_goal(&mut self, id: GoalId) -> Result<Goal> {
        if !self.contains(id) {
            return Err(GoalError::not_found(id));
        }

        let now = Timestamp::now();
        let ancestors = cascade::ancestor_chain(self, id);
        for goal in &mut self.goals {
            if goal.id == id || ancestors.contains(&goal.id) {
                goal.done = false;
                goal.updated_at = now;
            }
        }
        debug!("undid goal {id} and {} ancestor(s)", ancestors.len());
        // The goal was present above and retain never ran; it is still here.
        self.get(id)
            .cloned()
            .ok_or(GoalError::GoalNotFound { id })
    }

    /// Replaces a goal's label.
    ///
    /// Whether an effectively-done goal should be editable is presentation
    /// policy; the store accepts the edit since label changes never threaten
    /// forest integrity.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Validation`] if the trimmed label is empty, and
    /// [`GoalError::GoalNotFound`] if the id is absent.
    pub fn edit_goal(&mut self, params: &EditGoal) -> Result<Goal> {
        let text = params.text.trim();
        if text.is_empty() {
            return Err(GoalError::validation("text")
                .with_reason("Goal label must not be empty or whitespace-only"));
        }
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == params.id)
            .ok_or(GoalError::GoalNotFound { id: params.id })?;

        self.goals[index].text = text.to_string();
        self.goals[index].updated_at = Timestamp::now();
        debug!("edited goal {}", params.id);
        Ok(self.goals[index].clone())
    }

    // ------------------------------------------------------------------
    // Internal plumbing for snapshot load (see crate::snapshot)
    // ------------------------------------------------------------------

    pub(crate) fn from_parts(goals: Vec<Goal>, next_id: GoalId) -> Self {
        Self {
            goals,
            next_id,
            view: ViewState::default(),
        }
    }
}
