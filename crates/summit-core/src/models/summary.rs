//! Super goal summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, GoalRef, ProgressSummary, ResolvedChild, SuperGoal};

/// List-friendly view of a super goal with its current progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuperGoalSummary {
    pub id: u64,
    pub name: String,
    pub difficulty: Option<Difficulty>,
    pub is_dynamic: bool,
    pub progress: ProgressSummary,
    /// Static references that no longer resolve
    pub missing_count: u32,
    pub updated_at: Timestamp,
}

impl SuperGoalSummary {
    /// Resolve the super goal against the goal set and summarize it.
    pub fn from_super_goal<G: GoalRef>(super_goal: &SuperGoal, goals: &[G]) -> Self {
        let children = super_goal.resolve(goals);
        let missing_count = children.iter().filter(|child| child.is_missing).count() as u32;

        Self {
            id: super_goal.id,
            name: super_goal.name.clone(),
            difficulty: super_goal.difficulty.clone(),
            is_dynamic: super_goal.is_dynamic,
            progress: crate::engine::compute_super_goal_progress(&children),
            missing_count,
            updated_at: super_goal.updated_at,
        }
    }
}

/// A super goal together with its resolved children and progress.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuperGoalDetail {
    pub super_goal: SuperGoal,
    pub children: Vec<ResolvedChild>,
    pub progress: ProgressSummary,
}

impl SuperGoalDetail {
    pub fn resolve<G: GoalRef>(super_goal: SuperGoal, goals: &[G]) -> Self {
        let children = super_goal.resolve(goals);
        let progress = crate::engine::compute_super_goal_progress(&children);
        Self {
            super_goal,
            children,
            progress,
        }
    }

    /// Children whose static reference no longer resolves.
    pub fn missing_children(&self) -> impl Iterator<Item = &ResolvedChild> {
        self.children.iter().filter(|child| child.is_missing)
    }
}
