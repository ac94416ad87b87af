#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{Goal, GoalSummary};

    fn create_test_goal(id: u64, parent: Option<u64>, done: bool) -> Goal {
        Goal {
            id,
            text: format!("Goal {id}"),
            done,
            parent,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1_641_081_600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    #[test]
    fn is_root_reflects_parent() {
        assert!(create_test_goal(1, None, false).is_root());
        assert!(!create_test_goal(2, Some(1), false).is_root());
    }

    #[test]
    fn goal_serde_round_trip_is_lossless() {
        let goal = create_test_goal(3, Some(1), true);
        let json = serde_json::to_string(&goal).expect("serialize goal");
        let back: Goal = serde_json::from_str(&json).expect("deserialize goal");
        assert_eq!(back, goal);
    }

    #[test]
    fn summary_copies_goal_fields_and_derived_stats() {
        let goal = create_test_goal(4, None, true);
        let summary = GoalSummary::from_goal(&goal, false, 1, 3);

        assert_eq!(summary.id, 4);
        assert_eq!(summary.text, "Goal 4");
        assert!(summary.done);
        assert!(!summary.effectively_done);
        assert_eq!(summary.completed_children, 1);
        assert_eq!(summary.total_children, 3);
        assert!(summary.has_children());
    }
}
