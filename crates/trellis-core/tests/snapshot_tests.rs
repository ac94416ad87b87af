use jiff::Timestamp;
use trellis_core::{
    params::CreateGoal, GoalError, GoalRecord, GoalStore, Snapshot,
};

fn sample_store() -> GoalStore {
    let mut store = GoalStore::new();
    let root = store
        .add_goal(&CreateGoal {
            text: "Become a freelancer".to_string(),
            parent: None,
        })
        .expect("add root");
    let portfolio = store
        .add_goal(&CreateGoal {
            text: "Build a portfolio".to_string(),
            parent: Some(root.id),
        })
        .expect("add child");
    store
        .add_goal(&CreateGoal {
            text: "Learn Rust".to_string(),
            parent: None,
        })
        .expect("add second root");
    store.mark_done(portfolio.id).expect("mark child done");
    store
}

fn record(id: u64, parent: Option<u64>) -> GoalRecord {
    let at = Timestamp::from_second(1_640_995_200).unwrap();
    GoalRecord {
        id,
        text: format!("Goal {id}"),
        done: false,
        parent,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn test_round_trip_through_json_is_lossless() {
    let store = sample_store();

    let json = store.snapshot().to_json().expect("Failed to serialize");
    let restored =
        GoalStore::from_snapshot(Snapshot::from_json(&json).expect("Failed to parse"))
            .expect("Failed to load snapshot");

    // Same ids, texts, done flags, parent links, and order.
    let original: Vec<_> = store.iter().cloned().collect();
    let loaded: Vec<_> = restored.iter().cloned().collect();
    assert_eq!(original, loaded);
}

#[test]
fn test_loaded_store_resumes_id_assignment_above_maximum() {
    let store = sample_store();
    let max_id = store.iter().map(|g| g.id).max().unwrap();

    let mut restored = GoalStore::from_snapshot(store.snapshot()).expect("Failed to load");
    let goal = restored
        .add_goal(&CreateGoal {
            text: "New goal".to_string(),
            parent: None,
        })
        .expect("Failed to add after load");

    assert!(goal.id > max_id);
}

#[test]
fn test_load_rejects_dangling_parent() {
    let snapshot = Snapshot(vec![record(1, None), record(2, Some(9))]);

    let err = GoalStore::from_snapshot(snapshot).expect_err("dangling parent must be rejected");
    assert!(matches!(err, GoalError::Corrupt { .. }));
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let snapshot = Snapshot(vec![record(1, None), record(1, None)]);

    let err = GoalStore::from_snapshot(snapshot).expect_err("duplicate id must be rejected");
    assert!(matches!(err, GoalError::Corrupt { .. }));
}

#[test]
fn test_load_rejects_parent_cycle() {
    let snapshot = Snapshot(vec![record(1, Some(2)), record(2, Some(1))]);

    let err = GoalStore::from_snapshot(snapshot).expect_err("cycle must be rejected");
    assert!(matches!(err, GoalError::Corrupt { .. }));
}

#[test]
fn test_empty_snapshot_loads_empty_store() {
    let restored = GoalStore::from_snapshot(Snapshot::default()).expect("Failed to load empty");
    assert!(restored.is_empty());
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = Snapshot::from_json("{not json").expect_err("malformed input must fail");
    assert!(matches!(err, GoalError::Serialization { .. }));
}
