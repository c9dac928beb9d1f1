#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        engine::filter_goals_by_rule,
        models::{
            DifficultyKind, Goal, GoalFilter, GoalStatus, GoalType, Rule, SuperGoal,
            SuperGoalDetail, SuperGoalSummary,
        },
        params::ListGoals,
    };

    fn create_test_goal(id: u64, difficulty: &str, status: GoalStatus, tags: &[&str]) -> Goal {
        Goal {
            id,
            name: format!("Goal {id}"),
            description: None,
            difficulty: Some(difficulty.parse().unwrap()),
            status: Some(status),
            is_focus: id % 2 == 0,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            goal_type: GoalType::Standard,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    fn create_test_goals() -> Vec<Goal> {
        vec![
            create_test_goal(1, "easy", GoalStatus::FullyCompleted, &["health"]),
            create_test_goal(2, "hard", GoalStatus::InProgress, &["health", "finance"]),
            create_test_goal(3, "custom:marathon", GoalStatus::Validated, &["career"]),
            create_test_goal(4, "medium", GoalStatus::Paused, &[]),
            create_test_goal(5, "impossible", GoalStatus::NotStarted, &["finance"]),
        ]
    }

    fn create_test_super_goal(rule: Option<Rule>, ids: Vec<u64>) -> SuperGoal {
        SuperGoal {
            id: 100,
            name: "Balanced life".to_string(),
            description: Some("Everything that matters".to_string()),
            difficulty: Some("extreme".parse().unwrap()),
            is_dynamic: rule.is_some(),
            rule,
            child_goal_ids: ids,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
        }
    }

    fn ids(goals: &[&Goal]) -> Vec<u64> {
        goals.iter().map(|goal| goal.id).collect()
    }

    #[test]
    fn test_rule_json_round_trip_evaluates_identically() {
        let goals = create_test_goals();
        let rules = [
            Rule::new(),
            Rule::new().with_tags(["health", "finance"]),
            Rule::new()
                .with_difficulties([DifficultyKind::Custom, DifficultyKind::Hard])
                .exclude_completed(),
            Rule::new()
                .with_statuses([GoalStatus::Paused, GoalStatus::NotStarted])
                .focus_only(),
        ];

        for rule in rules {
            let json = serde_json::to_string(&rule).unwrap();
            let parsed: Rule = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, rule);
            assert_eq!(
                ids(&filter_goals_by_rule(&goals, &parsed)),
                ids(&filter_goals_by_rule(&goals, &rule)),
                "rule {json} evaluated differently after a round trip"
            );
        }
    }

    #[test]
    fn test_rule_json_field_names() {
        let rule: Rule = serde_json::from_str(
            r#"{"difficulties":["hard","custom"],"tags":["health"],"statuses":["validated"],"focusOnly":true,"excludeCompleted":false}"#,
        )
        .unwrap();

        assert_eq!(
            rule.difficulties(),
            [DifficultyKind::Hard, DifficultyKind::Custom]
        );
        assert_eq!(rule.tags(), ["health"]);
        assert_eq!(rule.statuses(), [GoalStatus::Validated]);
        assert!(rule.is_focus_only());
        assert!(!rule.excludes_completed());
    }

    #[test]
    fn test_goal_deserializes_with_missing_optionals() {
        let goal: Goal = serde_json::from_str(
            r#"{"id":7,"name":"Imported","created_at":"2022-01-01T00:00:00Z","updated_at":"2022-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(goal.status, None);
        assert_eq!(goal.difficulty, None);
        assert!(goal.tags.is_empty());
        assert_eq!(goal.goal_type, GoalType::Standard);
    }

    #[test]
    fn test_goal_status_with_icon() {
        assert_eq!(GoalStatus::NotStarted.with_icon(), "○ Not Started");
        assert!(GoalStatus::FullyCompleted.with_icon().starts_with('✓'));
        assert!(GoalStatus::Validated.is_completed());
        assert!(!GoalStatus::Paused.is_completed());
    }

    #[test]
    fn test_goal_filter_from_list_goals() {
        let filter = GoalFilter::from(&ListGoals::default());
        assert_eq!(filter, GoalFilter::standard());

        let filter = GoalFilter::from(&ListGoals {
            include_super: true,
            status: Some(GoalStatus::InProgress),
            focus_only: true,
        });
        assert_eq!(filter.goal_type, None);
        assert_eq!(filter.status, Some(GoalStatus::InProgress));
        assert_eq!(filter.is_focus, Some(true));
    }

    #[test]
    fn test_super_goal_summary_counts_missing() {
        let goals = create_test_goals();
        let super_goal = create_test_super_goal(None, vec![1, 2, 404]);
        let summary = SuperGoalSummary::from_super_goal(&super_goal, &goals);

        assert_eq!(summary.missing_count, 1);
        assert_eq!(summary.progress.total_count, 2);
        assert_eq!(summary.progress.completed_count, 1);
        assert_eq!(summary.progress.percentage, 50);
        assert!(!summary.is_dynamic);
    }

    #[test]
    fn test_super_goal_detail_counts_validated_as_completed() {
        let goals = create_test_goals();
        let super_goal = create_test_super_goal(Some(Rule::new().with_tags(["career"])), vec![]);
        let detail = SuperGoalDetail::resolve(super_goal, &goals);

        assert_eq!(detail.children.len(), 1);
        assert_eq!(detail.children[0].goal_id, 3);
        assert!(detail.progress.is_fully_completed);
        assert_eq!(detail.missing_children().count(), 0);
    }

    #[test]
    fn test_super_goal_json_is_camel_case() {
        let super_goal = create_test_super_goal(None, vec![1, 2]);
        let json = serde_json::to_value(&super_goal).unwrap();

        assert_eq!(json["isDynamic"], false);
        assert_eq!(json["childGoalIds"], serde_json::json!([1, 2]));
        assert_eq!(json["difficulty"], "extreme");
    }
}
