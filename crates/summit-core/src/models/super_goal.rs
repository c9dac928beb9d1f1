//! Super goal entity and its persisted membership representation.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Difficulty, GoalRef, ProgressSummary, ResolvedChild, Rule};
use crate::engine::{compute_super_goal_progress, resolve_children};

static EMPTY_RULE: Rule = Rule {
    difficulties: None,
    tags: None,
    statuses: None,
    focus_only: None,
    exclude_completed: None,
};

/// A goal whose completion is derived from a set of child goals.
///
/// Both `rule` and `child_goal_ids` may hold data at the same time (the
/// converter keeps the inactive one around for audit), but only the one
/// selected by `is_dynamic` is authoritative. Read membership through
/// [`SuperGoal::membership`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuperGoal {
    /// Unique identifier, shared with the goal id space
    pub id: u64,

    /// Display name
    pub name: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Difficulty shown alongside the super goal
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// Membership mode flag
    pub is_dynamic: bool,

    /// Membership rule, authoritative when dynamic
    #[serde(default)]
    pub rule: Option<Rule>,

    /// Explicit child ids, authoritative when static
    #[serde(default)]
    pub child_goal_ids: Vec<u64>,

    /// Timestamp when the super goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the super goal was last modified (UTC)
    pub updated_at: Timestamp,
}

/// The authoritative membership source of a super goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Membership<'a> {
    Dynamic(&'a Rule),
    Static(&'a [u64]),
}

/// Persisted membership triple, as exchanged with the goal store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MembershipRecord {
    pub child_goal_ids: Option<Vec<u64>>,
    pub rule: Option<Rule>,
    pub is_dynamic: bool,
}

impl SuperGoal {
    /// Returns the membership source selected by the mode flag.
    ///
    /// A dynamic super goal without a stored rule behaves like the empty
    /// rule.
    pub fn membership(&self) -> Membership<'_> {
        if self.is_dynamic {
            Membership::Dynamic(self.rule.as_ref().unwrap_or(&EMPTY_RULE))
        } else {
            Membership::Static(&self.child_goal_ids)
        }
    }

    /// The membership triple to hand to the store.
    pub fn membership_record(&self) -> MembershipRecord {
        let child_goal_ids = if self.is_dynamic && self.child_goal_ids.is_empty() {
            None
        } else {
            Some(self.child_goal_ids.clone())
        };

        MembershipRecord {
            child_goal_ids,
            rule: self.rule.clone(),
            is_dynamic: self.is_dynamic,
        }
    }

    /// Overwrites membership fields from a stored triple.
    pub fn apply_membership(&mut self, record: MembershipRecord) {
        self.is_dynamic = record.is_dynamic;
        self.rule = record.rule;
        self.child_goal_ids = record.child_goal_ids.unwrap_or_default();
    }

    /// Resolves the current child set against the live goal set.
    pub fn resolve<G: GoalRef>(&self, goals: &[G]) -> Vec<ResolvedChild> {
        resolve_children(self, goals)
    }

    /// Resolves children and aggregates their completion.
    pub fn progress<G: GoalRef>(&self, goals: &[G]) -> ProgressSummary {
        compute_super_goal_progress(&self.resolve(goals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn super_goal(is_dynamic: bool, rule: Option<Rule>, ids: Vec<u64>) -> SuperGoal {
        SuperGoal {
            id: 1,
            name: "Get fit".to_string(),
            description: None,
            difficulty: None,
            is_dynamic,
            rule,
            child_goal_ids: ids,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_membership_follows_mode_flag() {
        let rule = Rule::new().with_tags(["health"]);
        let dynamic = super_goal(true, Some(rule.clone()), vec![7, 8]);
        assert_eq!(dynamic.membership(), Membership::Dynamic(&rule));

        let stale = super_goal(false, Some(rule), vec![7, 8]);
        assert_eq!(stale.membership(), Membership::Static(&[7, 8]));
    }

    #[test]
    fn test_dynamic_without_rule_is_empty_rule() {
        let goal = super_goal(true, None, vec![]);
        match goal.membership() {
            Membership::Dynamic(rule) => assert!(rule.is_unconstrained()),
            Membership::Static(_) => panic!("expected dynamic membership"),
        }
    }

    #[test]
    fn test_membership_record_round_trip() {
        let goal = super_goal(false, None, vec![3, 4]);
        let record = goal.membership_record();
        assert_eq!(record.child_goal_ids, Some(vec![3, 4]));
        assert!(!record.is_dynamic);

        let mut restored = super_goal(true, Some(Rule::new().focus_only()), vec![]);
        restored.apply_membership(record);
        assert_eq!(restored.membership(), Membership::Static(&[3, 4]));
        assert_eq!(restored.rule, None);
    }

    #[test]
    fn test_record_json_shape() {
        let goal = super_goal(true, Some(Rule::new().exclude_completed()), vec![]);
        let json = serde_json::to_string(&goal.membership_record()).unwrap();
        assert_eq!(
            json,
            r#"{"childGoalIds":null,"rule":{"excludeCompleted":true},"isDynamic":true}"#
        );
    }
}
