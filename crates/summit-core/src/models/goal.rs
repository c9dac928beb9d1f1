//! Goal model definition and the read-only view the rule engine consumes.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Difficulty, DifficultyKind, GoalStatus, GoalType};

/// Represents a single goal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Display name of the goal
    pub name: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Difficulty tier or custom difficulty, if one was chosen
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// Current status (absent for imported goals that never had one)
    #[serde(default)]
    pub status: Option<GoalStatus>,

    /// User-pinned focus flag
    #[serde(default)]
    pub is_focus: bool,

    /// Free-form tags; order and duplicates carry no meaning
    #[serde(default)]
    pub tags: Vec<String>,

    /// Standard goal or super goal
    #[serde(default)]
    pub goal_type: GoalType,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,
}

/// The fields the rule engine reads from a goal-shaped record.
///
/// Any record type exposing these can be evaluated, resolved, and
/// aggregated; the engine never requires a concrete [`Goal`].
pub trait GoalRef {
    fn id(&self) -> u64;

    fn difficulty(&self) -> Option<DifficultyKind>;

    fn status(&self) -> Option<GoalStatus>;

    fn is_focus(&self) -> bool;

    fn tags(&self) -> &[String];

    fn goal_type(&self) -> GoalType;

    /// Human-readable label used by resolved child descriptors.
    fn name(&self) -> Option<&str> {
        None
    }

    fn is_super(&self) -> bool {
        self.goal_type() == GoalType::Super
    }

    fn is_completed(&self) -> bool {
        self.status().is_some_and(|status| status.is_completed())
    }
}

impl<T: GoalRef + ?Sized> GoalRef for &T {
    fn id(&self) -> u64 {
        (**self).id()
    }

    fn difficulty(&self) -> Option<DifficultyKind> {
        (**self).difficulty()
    }

    fn status(&self) -> Option<GoalStatus> {
        (**self).status()
    }

    fn is_focus(&self) -> bool {
        (**self).is_focus()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn goal_type(&self) -> GoalType {
        (**self).goal_type()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn is_super(&self) -> bool {
        (**self).is_super()
    }

    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }
}

impl GoalRef for Goal {
    fn id(&self) -> u64 {
        self.id
    }

    fn difficulty(&self) -> Option<DifficultyKind> {
        self.difficulty.as_ref().map(Difficulty::kind)
    }

    fn status(&self) -> Option<GoalStatus> {
        self.status
    }

    fn is_focus(&self) -> bool {
        self.is_focus
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn goal_type(&self) -> GoalType {
        self.goal_type
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
