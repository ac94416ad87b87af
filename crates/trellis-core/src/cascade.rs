//! Cascade traversals over the goal forest.
//!
//! The flat-collection data model keeps parent/child relationships as derived
//! edges, so the two cascading mutations are the only places that need real
//! graph traversal. Their directions are deliberately asymmetric:
//!
//! - **Delete cascades downward** (goal → descendants): destroying a goal
//!   destroys everything that only existed to support it.
//! - **Undo cascades upward** (goal → ancestors): an ancestor's own `done`
//!   flag is a claim about its entire subtree, which a single un-completed
//!   descendant invalidates.
//! - **Mark-done cascades in neither direction**: it sets one goal's own flag
//!   and leaves everything above to the live derivation in [`crate::derive`].
//!   Cascading "done" upward would complete a parent before sibling subtrees
//!   are finished.
//!
//! Both traversals terminate because the parent graph is acyclic and finite.

use crate::{
    models::GoalId,
    store::GoalStore,
};

/// Collect a goal and all of its transitive descendants.
///
/// Returns the full closure in breadth-first order, starting with `id`
/// itself. Returns an empty closure when `id` is not in the store, which
/// makes cascade-delete idempotent.
pub fn descendant_closure(store: &GoalStore, id: GoalId) -> Vec<GoalId> {
    if !store.contains(id) {
        return Vec::new();
    }

    // Worklist expansion: every element already in the closure gets its
    // children appended exactly once.
    let mut closure = vec![id];
    let mut cursor = 0;
    while cursor < closure.len() {
        let current = closure[cursor];
        closure.extend(store.children(current).map(|child| child.id));
        cursor += 1;
    }
    closure
}

/// Collect the ancestors of a goal, nearest parent first, up to its root.
///
/// The goal itself is not included. Returns an empty chain for a root goal
/// or an unknown id.
pub fn ancestor_chain(store: &GoalStore, id: GoalId) -> Vec<GoalId> {
    let mut chain = Vec::new();
    let mut next = store.get(id).and_then(|goal| goal.parent);
    while let Some(parent_id) = next {
        chain.push(parent_id);
        next = store.get(parent_id).and_then(|goal| goal.parent);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreateGoal;

    fn forest() -> (GoalStore, GoalId, GoalId, GoalId) {
        let mut store = GoalStore::new();
        let root = store
            .add_goal(&CreateGoal {
                text: "root".to_string(),
                parent: None,
            })
            .expect("add root");
        let child = store
            .add_goal(&CreateGoal {
                text: "child".to_string(),
                parent: Some(root.id),
            })
            .expect("add child");
        let grandchild = store
            .add_goal(&CreateGoal {
                text: "grandchild".to_string(),
                parent: Some(child.id),
            })
            .expect("add grandchild");
        (store, root.id, child.id, grandchild.id)
    }

    #[test]
    fn closure_includes_all_descendants() {
        let (store, root, child, grandchild) = forest();
        let closure = descendant_closure(&store, root);
        assert_eq!(closure, vec![root, child, grandchild]);
    }

    #[test]
    fn closure_of_leaf_is_singleton() {
        let (store, _, _, grandchild) = forest();
        assert_eq!(descendant_closure(&store, grandchild), vec![grandchild]);
    }

    #[test]
    fn closure_of_unknown_id_is_empty() {
        let (store, ..) = forest();
        assert!(descendant_closure(&store, 999).is_empty());
    }

    #[test]
    fn ancestors_run_nearest_first() {
        let (store, root, child, grandchild) = forest();
        assert_eq!(ancestor_chain(&store, grandchild), vec![child, root]);
        assert!(ancestor_chain(&store, root).is_empty());
    }
}
