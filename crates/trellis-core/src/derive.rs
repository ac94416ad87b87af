//! Derivation of effective completion state.
//!
//! Effective completion is a pure function of the current forest, recomputed
//! on every query and never stored on a goal. Caching the derived state on
//! the model would let the delete and undo cascades disagree with a stale
//! flag; recomputation makes that class of bug impossible at a cost of
//! O(depth × children) per query, which is fine for personal-scale forests.
//!
//! All functions here take the store immutably and mutate nothing.

use crate::{
    models::{Goal, GoalId, GoalSummary},
    store::GoalStore,
};

/// Progress of a goal's direct sub-goals, in terms of effective completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Direct sub-goals that are effectively done
    pub done: u32,
    /// Total direct sub-goals
    pub total: u32,
}

/// Whether a goal is effectively done.
///
/// A leaf is effectively done exactly when its own `done` flag is set. A goal
/// with sub-goals additionally requires every descendant to be effectively
/// done. A parent with `done=true` but an incomplete child is therefore NOT
/// effectively done, and deleting the children of an un-done parent does not
/// retroactively complete it.
pub fn is_effectively_done(store: &GoalStore, goal: &Goal) -> bool {
    if !goal.done {
        return false;
    }
    store
        .children(goal.id)
        .all(|child| is_effectively_done(store, child))
}

/// Whether every direct sub-goal of `id` is effectively done.
///
/// Vacuously true for a goal without sub-goals. This is the predicate a
/// presentation layer should consult before offering mark-done on a parent;
/// the store itself never auto-completes a parent.
pub fn all_children_effectively_done(store: &GoalStore, id: GoalId) -> bool {
    store
        .children(id)
        .all(|child| is_effectively_done(store, child))
}

/// Count the effectively-done direct sub-goals of `id`.
///
/// Backs "2/3" style progress indicators. Uses effective completion per
/// child, so a sub-goal with unfinished children of its own never counts.
pub fn completion_progress(store: &GoalStore, id: GoalId) -> Progress {
    let mut progress = Progress::default();
    for child in store.children(id) {
        progress.total += 1;
        if is_effectively_done(store, child) {
            progress.done += 1;
        }
    }
    progress
}

/// Count the goals in the subtrees rooted at `roots`, including the roots.
///
/// Used for the aggregate "N total completed including sub-goals" statistic,
/// where the caller passes the effectively-done roots.
pub fn total_completed_count<'a>(
    store: &GoalStore,
    roots: impl IntoIterator<Item = &'a Goal>,
) -> usize {
    roots
        .into_iter()
        .map(|goal| subtree_size(store, goal.id))
        .sum()
}

fn subtree_size(store: &GoalStore, id: GoalId) -> usize {
    1 + store
        .children(id)
        .map(|child| subtree_size(store, child.id))
        .sum::<usize>()
}

/// Build a [`GoalSummary`] with derived completion statistics for a goal.
pub fn summarize(store: &GoalStore, goal: &Goal) -> GoalSummary {
    let progress = completion_progress(store, goal.id);
    GoalSummary::from_goal(
        goal,
        is_effectively_done(store, goal),
        progress.done,
        progress.total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreateGoal;

    fn add(store: &mut GoalStore, text: &str, parent: Option<GoalId>) -> GoalId {
        store
            .add_goal(&CreateGoal {
                text: text.to_string(),
                parent,
            })
            .expect("add goal")
            .id
    }

    #[test]
    fn leaf_effective_completion_is_its_own_flag() {
        let mut store = GoalStore::new();
        let leaf = add(&mut store, "leaf", None);

        assert!(!is_effectively_done(&store, store.get(leaf).unwrap()));
        store.mark_done(leaf).expect("mark done");
        assert!(is_effectively_done(&store, store.get(leaf).unwrap()));
    }

    #[test]
    fn parent_needs_own_flag_and_whole_subtree() {
        let mut store = GoalStore::new();
        let parent = add(&mut store, "parent", None);
        let child = add(&mut store, "child", Some(parent));
        let grandchild = add(&mut store, "grandchild", Some(child));

        // Own flag set, subtree incomplete.
        store.mark_done(parent).expect("mark parent");
        assert!(!is_effectively_done(&store, store.get(parent).unwrap()));

        store.mark_done(grandchild).expect("mark grandchild");
        assert!(!is_effectively_done(&store, store.get(parent).unwrap()));

        store.mark_done(child).expect("mark child");
        assert!(is_effectively_done(&store, store.get(parent).unwrap()));
    }

    #[test]
    fn all_children_done_is_vacuously_true_for_leaves() {
        let mut store = GoalStore::new();
        let leaf = add(&mut store, "leaf", None);
        assert!(all_children_effectively_done(&store, leaf));
    }

    #[test]
    fn progress_counts_effective_completion_not_raw_flags() {
        let mut store = GoalStore::new();
        let parent = add(&mut store, "parent", None);
        let a = add(&mut store, "a", Some(parent));
        let b = add(&mut store, "b", Some(parent));
        let b_child = add(&mut store, "b-child", Some(b));

        store.mark_done(a).expect("mark a");
        // b's own flag is set but its child is not: b must not count.
        store.mark_done(b).expect("mark b");

        assert_eq!(completion_progress(&store, parent), Progress { done: 1, total: 2 });

        store.mark_done(b_child).expect("mark b child");
        assert_eq!(completion_progress(&store, parent), Progress { done: 2, total: 2 });
    }

    #[test]
    fn total_completed_counts_whole_subtrees() {
        let mut store = GoalStore::new();
        let root = add(&mut store, "root", None);
        let a = add(&mut store, "a", Some(root));
        add(&mut store, "a-1", Some(a));
        let _other = add(&mut store, "other", None);

        let roots: Vec<_> = store.roots().cloned().collect();
        assert_eq!(total_completed_count(&store, roots.iter()), 4);

        let first: Vec<_> = store.roots().filter(|g| g.id == root).cloned().collect();
        assert_eq!(total_completed_count(&store, first.iter()), 3);
    }
}
