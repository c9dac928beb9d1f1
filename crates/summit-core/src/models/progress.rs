//! Child descriptors and progress summaries for super goals.

use serde::{Deserialize, Serialize};

use super::{DifficultyKind, GoalRef, GoalStatus};

/// Anything the progress aggregator can count.
pub trait ChildProgress {
    fn is_completed(&self) -> bool;

    fn is_missing(&self) -> bool;
}

/// One entry of a super goal's resolved child set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChild {
    pub goal_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    pub is_completed: bool,
    /// The referenced goal was deleted or turned into a super goal.
    pub is_missing: bool,
}

impl ResolvedChild {
    /// Descriptor for a live goal.
    pub fn from_goal<G: GoalRef>(goal: &G) -> Self {
        Self {
            goal_id: goal.id(),
            name: goal.name().map(String::from),
            difficulty: goal.difficulty(),
            status: goal.status(),
            is_completed: goal.is_completed(),
            is_missing: false,
        }
    }

    /// Descriptor for a static reference that no longer resolves.
    pub fn missing(goal_id: u64) -> Self {
        Self {
            goal_id,
            name: None,
            difficulty: None,
            status: None,
            is_completed: false,
            is_missing: true,
        }
    }
}

impl ChildProgress for ResolvedChild {
    fn is_completed(&self) -> bool {
        self.is_completed
    }

    fn is_missing(&self) -> bool {
        self.is_missing
    }
}

impl<T: ChildProgress + ?Sized> ChildProgress for &T {
    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }

    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

/// Aggregated completion of a super goal's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_count: u32,
    pub total_count: u32,
    /// Whole percent, 0 to 100
    pub percentage: u8,
    pub is_fully_completed: bool,
}

impl ProgressSummary {
    /// Children that still need work.
    pub fn pending_count(&self) -> u32 {
        self.total_count - self.completed_count
    }
}
