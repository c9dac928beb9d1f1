//! Parameter structures for Summit operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives or
//! dependencies.
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these structures to add their own derives and
//! convert into them with `.into()`. JSON schema generation is enabled only
//! through the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{Difficulty, GoalStatus, GoalType, MembershipRecord, Rule},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_goal, show_super_goal and snapshot_super_goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateGoal {
    /// Name of the goal (required)
    pub name: String,
    /// Optional detailed description of the goal
    pub description: Option<String>,
    /// Difficulty tier ('easy' .. 'impossible') or 'custom:<id>'
    pub difficulty: Option<Difficulty>,
    /// Initial status; defaults to 'not_started'
    pub status: Option<GoalStatus>,
    /// Whether the goal is pinned as a focus goal
    #[serde(default)]
    pub is_focus: bool,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateGoal {
    /// Rejects blank names.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Parameters for updating an existing goal.
///
/// Only populated fields change. Retyping a goal to `super` removes it from
/// every super goal's resolved children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateGoal {
    /// Goal ID to update (required)
    pub id: u64,
    /// Updated name
    pub name: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated difficulty
    pub difficulty: Option<Difficulty>,
    /// Updated status
    pub status: Option<GoalStatus>,
    /// Updated focus flag
    pub is_focus: Option<bool>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
    /// Updated goal type
    pub goal_type: Option<GoalType>,
}

impl UpdateGoal {
    /// Rejects blank names.
    pub fn validate(&self) -> Result<()> {
        self.name.as_deref().map_or(Ok(()), validate_name)
    }

    /// Human-readable list of the fields this update touches.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{name}'"));
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(difficulty) = &self.difficulty {
            changes.push(format!("Set difficulty to {difficulty}"));
        }
        if let Some(status) = self.status {
            changes.push(format!("Changed status to {}", status.as_str()));
        }
        if let Some(is_focus) = self.is_focus {
            changes.push(if is_focus {
                "Marked as focus".to_string()
            } else {
                "Removed focus".to_string()
            });
        }
        if let Some(tags) = &self.tags {
            changes.push(format!("Replaced tags with [{}]", tags.join(", ")));
        }
        if let Some(goal_type) = self.goal_type {
            changes.push(format!("Changed type to {}", goal_type.as_str()));
        }
        changes
    }
}

/// Parameters for listing goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListGoals {
    /// Whether super goals are listed alongside standard goals
    #[serde(default)]
    pub include_super: bool,
    /// Only goals with this status
    pub status: Option<GoalStatus>,
    /// Only focus goals
    #[serde(default)]
    pub focus_only: bool,
}

/// Parameters for deleting a goal or super goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteGoal {
    /// ID of the record to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for creating a super goal.
///
/// Supplying a `rule` creates a dynamic super goal; otherwise the super goal
/// is static and owns `child_goal_ids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateSuperGoal {
    /// Name of the super goal (required)
    pub name: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Difficulty shown alongside the super goal
    pub difficulty: Option<Difficulty>,
    /// Membership rule for a dynamic super goal
    pub rule: Option<Rule>,
    /// Explicit children for a static super goal
    #[serde(default)]
    pub child_goal_ids: Vec<u64>,
}

impl CreateSuperGoal {
    /// Checks the name and that exactly one membership source is given.
    ///
    /// ```rust
    /// use summit_core::{models::Rule, params::CreateSuperGoal};
    ///
    /// let params = CreateSuperGoal {
    ///     name: "Fitness".to_string(),
    ///     rule: Some(Rule::new()),
    ///     child_goal_ids: vec![1, 2],
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.rule.is_some() && !self.child_goal_ids.is_empty() {
            return Err(TrackerError::invalid_input("child_goal_ids").with_reason(
                "A super goal is either dynamic (rule) or static (child ids), not both",
            ));
        }
        Ok(())
    }

    /// Initial membership triple for the store.
    pub fn membership_record(&self) -> MembershipRecord {
        match &self.rule {
            Some(rule) => MembershipRecord {
                child_goal_ids: None,
                rule: Some(rule.clone()),
                is_dynamic: true,
            },
            None => {
                let mut ids = self.child_goal_ids.clone();
                let mut seen = std::collections::HashSet::new();
                ids.retain(|id| seen.insert(*id));
                MembershipRecord {
                    child_goal_ids: Some(ids),
                    rule: None,
                    is_dynamic: false,
                }
            }
        }
    }
}

/// Parameters for editing a super goal's name, description or difficulty.
///
/// Membership is edited through the rule, selection and mode operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateSuperGoal {
    /// Super goal ID
    pub id: u64,
    /// Updated name
    pub name: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated difficulty
    pub difficulty: Option<Difficulty>,
}

impl UpdateSuperGoal {
    /// Rejects blank names.
    pub fn validate(&self) -> Result<()> {
        self.name.as_deref().map_or(Ok(()), validate_name)
    }

    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{name}'"));
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(difficulty) = &self.difficulty {
            changes.push(format!("Set difficulty to {difficulty}"));
        }
        changes
    }
}

/// Parameters for replacing a super goal's rule.
///
/// Static super goals keep the rule for a later promote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetRule {
    /// Super goal ID
    pub id: u64,
    /// The new rule
    pub rule: Rule,
}

/// Parameters for editing the selection of a static super goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectChildren {
    /// Super goal ID
    pub id: u64,
    /// Goal IDs to add
    #[serde(default)]
    pub add: Vec<u64>,
    /// Goal IDs to remove; missing references can be removed too
    #[serde(default)]
    pub remove: Vec<u64>,
}

/// Parameters for promoting a super goal to dynamic membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PromoteSuperGoal {
    /// Super goal ID
    pub id: u64,
    /// Rule to use; defaults to the retained rule, then to the empty rule
    pub rule: Option<Rule>,
}

/// Parameters for previewing a rule without saving anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PreviewRule {
    /// Rule to evaluate
    pub rule: Rule,
    /// Super goal the rule is meant for, excluded from the matches
    pub super_goal_id: Option<u64>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TrackerError::invalid_input("name").with_reason("Name cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_goal_rejects_blank_name() {
        let params = CreateGoal {
            name: "   ".to_string(),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("cannot be empty"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_goal_without_name_is_valid() {
        let params = UpdateGoal {
            id: 1,
            status: Some(GoalStatus::Paused),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.changes(), ["Changed status to paused"]);
    }

    #[test]
    fn test_create_super_goal_static_record_dedupes_ids() {
        let params = CreateSuperGoal {
            name: "Reading".to_string(),
            child_goal_ids: vec![3, 1, 3],
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let record = params.membership_record();
        assert!(!record.is_dynamic);
        assert_eq!(record.child_goal_ids, Some(vec![3, 1]));
        assert_eq!(record.rule, None);
    }

    #[test]
    fn test_create_super_goal_dynamic_record() {
        let params = CreateSuperGoal {
            name: "Health".to_string(),
            rule: Some(Rule::new().with_tags(["health"])),
            ..Default::default()
        };

        let record = params.membership_record();
        assert!(record.is_dynamic);
        assert_eq!(record.child_goal_ids, None);
        assert_eq!(record.rule, params.rule);
    }

    #[test]
    fn test_list_goals_deserializes_defaults() {
        let params: ListGoals = serde_json::from_str(r#"{"status": "paused"}"#).unwrap();
        assert!(!params.include_super);
        assert!(!params.focus_only);
        assert_eq!(params.status, Some(GoalStatus::Paused));
    }
}
