//! Rule evaluation against a goal set.

use crate::models::{GoalRef, Rule};

/// Returns true when `goal` satisfies every populated predicate of `rule`.
///
/// Checks run cheapest first and stop at the first failure. A goal with no
/// difficulty or no status never satisfies a rule constraining that field.
pub fn goal_matches_rule<G: GoalRef + ?Sized>(goal: &G, rule: &Rule) -> bool {
    let difficulties = rule.difficulties();
    if !difficulties.is_empty()
        && !goal
            .difficulty()
            .is_some_and(|difficulty| difficulties.contains(&difficulty))
    {
        return false;
    }

    let tags = rule.tags();
    if !tags.is_empty() && !goal.tags().iter().any(|tag| tags.contains(tag)) {
        return false;
    }

    let statuses = rule.statuses();
    if !statuses.is_empty() && !goal.status().is_some_and(|status| statuses.contains(&status)) {
        return false;
    }

    if rule.is_focus_only() && !goal.is_focus() {
        return false;
    }

    if rule.excludes_completed() && goal.is_completed() {
        return false;
    }

    true
}

/// Stable filter of `goals` by `rule`.
///
/// The result keeps input order. Super goals and the owning super goal are
/// not special-cased here; pass the output of
/// [`eligible_goals`](super::eligible_goals) when resolving membership.
///
/// ```rust
/// use summit_core::engine::filter_goals_by_rule;
/// use summit_core::models::Rule;
/// # use summit_core::models::{Goal, GoalType};
/// # fn goal(id: u64, tags: &[&str]) -> Goal {
/// #     Goal {
/// #         id,
/// #         name: format!("goal {id}"),
/// #         description: None,
/// #         difficulty: None,
/// #         status: None,
/// #         is_focus: false,
/// #         tags: tags.iter().map(|t| t.to_string()).collect(),
/// #         goal_type: GoalType::Standard,
/// #         created_at: jiff::Timestamp::UNIX_EPOCH,
/// #         updated_at: jiff::Timestamp::UNIX_EPOCH,
/// #     }
/// # }
///
/// let goals = vec![goal(1, &["career"]), goal(2, &["finance", "career"]), goal(3, &[])];
/// let rule = Rule::new().with_tags(["health", "finance"]);
///
/// let ids: Vec<u64> = filter_goals_by_rule(&goals, &rule).iter().map(|g| g.id).collect();
/// assert_eq!(ids, [2]);
/// ```
pub fn filter_goals_by_rule<'a, G: GoalRef>(goals: &'a [G], rule: &Rule) -> Vec<&'a G> {
    goals
        .iter()
        .filter(|goal| rule.matches(*goal))
        .collect()
}
