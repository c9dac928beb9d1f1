//! Read path: turning a super goal into its resolved child set.

use std::collections::{HashMap, HashSet};

use log::trace;

use super::filter_goals_by_rule;
use crate::models::{GoalRef, Membership, ResolvedChild, SuperGoal};

/// Goals a super goal may contain: everything except itself and any super
/// goal.
pub fn eligible_goals<G: GoalRef>(goals: &[G], super_goal_id: u64) -> Vec<&G> {
    goals
        .iter()
        .filter(|goal| goal.id() != super_goal_id && !goal.is_super())
        .collect()
}

/// Resolves a super goal's children against the current goal set.
///
/// Dynamic super goals evaluate their rule over the eligible goals. Static
/// super goals dereference each stored id in order; an id that is gone, or
/// now names a super goal (or the super goal itself), becomes a missing
/// descriptor instead of being dropped. Repeated ids resolve once.
pub fn resolve_children<G: GoalRef>(super_goal: &SuperGoal, goals: &[G]) -> Vec<ResolvedChild> {
    match super_goal.membership() {
        Membership::Dynamic(rule) => {
            let eligible = eligible_goals(goals, super_goal.id);
            let children: Vec<ResolvedChild> = filter_goals_by_rule(&eligible, rule)
                .into_iter()
                .map(ResolvedChild::from_goal)
                .collect();
            trace!(
                "super goal {} matched {} of {} eligible goals",
                super_goal.id,
                children.len(),
                eligible.len()
            );
            children
        }
        Membership::Static(ids) => {
            let by_id: HashMap<u64, &G> = goals.iter().map(|goal| (goal.id(), goal)).collect();
            let mut seen = HashSet::with_capacity(ids.len());

            ids.iter()
                .filter(|id| seen.insert(**id))
                .map(|&id| match by_id.get(&id) {
                    Some(goal) if !goal.is_super() && id != super_goal.id => {
                        ResolvedChild::from_goal(goal)
                    }
                    _ => {
                        trace!("super goal {} references missing goal {id}", super_goal.id);
                        ResolvedChild::missing(id)
                    }
                })
                .collect()
        }
    }
}
