//! Status enumerations for goals.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of goal statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal has not been started yet
    #[default]
    NotStarted,

    /// Goal is being worked on
    InProgress,

    /// Goal has been finished
    FullyCompleted,

    /// Goal is on hold
    Paused,

    /// Goal was finished and then confirmed by a reviewer
    Validated,
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(GoalStatus::NotStarted),
            "in_progress" | "inprogress" => Ok(GoalStatus::InProgress),
            "fully_completed" | "fullycompleted" | "completed" => Ok(GoalStatus::FullyCompleted),
            "paused" => Ok(GoalStatus::Paused),
            "validated" => Ok(GoalStatus::Validated),
            _ => Err(format!("Invalid goal status: {s}")),
        }
    }
}

impl GoalStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::FullyCompleted => "fully_completed",
            GoalStatus::Paused => "paused",
            GoalStatus::Validated => "validated",
        }
    }

    /// The one completion predicate shared by rule evaluation and progress
    /// aggregation. A validated goal has been completed first, so it counts.
    ///
    /// ```rust
    /// use summit_core::models::GoalStatus;
    ///
    /// assert!(GoalStatus::FullyCompleted.is_completed());
    /// assert!(GoalStatus::Validated.is_completed());
    /// assert!(!GoalStatus::Paused.is_completed());
    /// ```
    pub fn is_completed(&self) -> bool {
        matches!(self, GoalStatus::FullyCompleted | GoalStatus::Validated)
    }

    /// Get status with an icon for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "○ Not Started",
            GoalStatus::InProgress => "➤ In Progress",
            GoalStatus::FullyCompleted => "✓ Completed",
            GoalStatus::Paused => "‖ Paused",
            GoalStatus::Validated => "★ Validated",
        }
    }
}

/// Discriminator separating ordinary goals from super goals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    Standard,
    Super,
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(GoalType::Standard),
            "super" => Ok(GoalType::Super),
            _ => Err(format!("Invalid goal type: {s}")),
        }
    }
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Standard => "standard",
            GoalType::Super => "super",
        }
    }
}
