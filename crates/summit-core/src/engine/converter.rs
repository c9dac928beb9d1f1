//! Conversion between static and dynamic super goal membership.
//!
//! Both conversions are pure: they return a candidate super goal and leave
//! persisting it to the caller. Neither touches timestamps; the store sets
//! `updated_at` when the candidate is committed.

use log::debug;

use super::{eligible_goals, filter_goals_by_rule};
use crate::models::{GoalRef, Membership, Rule, SuperGoal};

/// Freezes the current matches of a dynamic super goal into a static id
/// list.
///
/// The rule stays on the candidate for audit but stops being authoritative.
/// A super goal that is already static comes back unchanged.
pub fn snapshot_to_static<G: GoalRef>(super_goal: &SuperGoal, goals: &[G]) -> SuperGoal {
    let mut candidate = super_goal.clone();

    if let Membership::Dynamic(rule) = super_goal.membership() {
        let eligible = eligible_goals(goals, super_goal.id);
        candidate.child_goal_ids = filter_goals_by_rule(&eligible, rule)
            .iter()
            .map(|goal| goal.id())
            .collect();
        candidate.is_dynamic = false;

        debug!(
            "snapshot super goal {} to {} static children",
            super_goal.id,
            candidate.child_goal_ids.len()
        );
    }

    candidate
}

/// Makes a super goal dynamic.
///
/// Uses `rule` when given, otherwise the rule the super goal still carries,
/// otherwise the empty rule, which matches every eligible goal. Stored child
/// ids stay on the candidate but are ignored from now on.
pub fn promote_to_dynamic(super_goal: &SuperGoal, rule: Option<Rule>) -> SuperGoal {
    let mut candidate = super_goal.clone();
    candidate.rule = Some(rule.or_else(|| super_goal.rule.clone()).unwrap_or_default());
    candidate.is_dynamic = true;

    debug!("promoted super goal {} to dynamic", super_goal.id);
    candidate
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Goal, GoalStatus, GoalType, ResolvedChild};

    fn goal(id: u64, status: GoalStatus, tags: &[&str]) -> Goal {
        Goal {
            id,
            name: format!("Goal {id}"),
            description: None,
            difficulty: None,
            status: Some(status),
            is_focus: false,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            goal_type: GoalType::Standard,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn dynamic(rule: Rule) -> SuperGoal {
        SuperGoal {
            id: 50,
            name: "Wellbeing".to_string(),
            description: None,
            difficulty: None,
            is_dynamic: true,
            rule: Some(rule),
            child_goal_ids: Vec::new(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn goal_set() -> Vec<Goal> {
        vec![
            goal(1, GoalStatus::InProgress, &["health"]),
            goal(2, GoalStatus::FullyCompleted, &["health"]),
            goal(3, GoalStatus::NotStarted, &["career"]),
            Goal {
                goal_type: GoalType::Super,
                ..goal(4, GoalStatus::InProgress, &["health"])
            },
        ]
    }

    fn ids(children: &[ResolvedChild]) -> Vec<u64> {
        children.iter().map(|child| child.goal_id).collect()
    }

    #[test]
    fn test_snapshot_freezes_current_matches() {
        let mut goals = goal_set();
        let owner = dynamic(Rule::new().with_tags(["health"]));
        let frozen = snapshot_to_static(&owner, &goals);

        assert!(!frozen.is_dynamic);
        assert_eq!(frozen.child_goal_ids, [1, 2]);
        assert_eq!(frozen.membership(), Membership::Static(&[1, 2]));

        // New matches of the old rule no longer join.
        goals.push(goal(5, GoalStatus::InProgress, &["health"]));
        assert_eq!(ids(&frozen.resolve(&goals)), [1, 2]);
        assert_eq!(ids(&owner.resolve(&goals)), [1, 2, 5]);
    }

    #[test]
    fn test_snapshot_of_static_is_unchanged() {
        let goals = goal_set();
        let owner = snapshot_to_static(&dynamic(Rule::new()), &goals);
        assert_eq!(snapshot_to_static(&owner, &goals), owner);
    }

    #[test]
    fn test_snapshot_does_not_mutate_source() {
        let goals = goal_set();
        let owner = dynamic(Rule::new());
        let _ = snapshot_to_static(&owner, &goals);
        assert!(owner.is_dynamic);
        assert!(owner.child_goal_ids.is_empty());
    }

    #[test]
    fn test_promote_without_rule_defaults_to_empty_rule() {
        let goals = goal_set();
        let mut owner = snapshot_to_static(&dynamic(Rule::new()), &goals);
        owner.rule = None;

        let promoted = promote_to_dynamic(&owner, None);
        assert!(promoted.is_dynamic);
        assert_eq!(promoted.rule, Some(Rule::new()));
        assert_eq!(ids(&promoted.resolve(&goals)), [1, 2, 3]);
    }

    #[test]
    fn test_promote_prefers_supplied_rule() {
        let goals = goal_set();
        let owner = snapshot_to_static(&dynamic(Rule::new().with_tags(["health"])), &goals);
        let promoted = promote_to_dynamic(&owner, Some(Rule::new().exclude_completed()));
        assert_eq!(ids(&promoted.resolve(&goals)), [1, 3]);
    }

    #[test]
    fn test_round_trip_with_empty_rule() {
        let goals = goal_set();
        let owner = dynamic(Rule::new());
        let before = owner.resolve(&goals);

        let frozen = snapshot_to_static(&owner, &goals);
        let restored = promote_to_dynamic(&frozen, Some(Rule::new()));
        assert_eq!(restored.resolve(&goals), before);
    }

    #[test]
    fn test_round_trip_retains_rule() {
        let goals = goal_set();
        let owner = dynamic(Rule::new().with_tags(["health"]).exclude_completed());
        let before = owner.resolve(&goals);

        let restored = promote_to_dynamic(&snapshot_to_static(&owner, &goals), None);
        assert_eq!(restored.resolve(&goals), before);
        assert_eq!(restored.rule, owner.rule);
    }
}
