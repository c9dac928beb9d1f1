//! Declarative membership rule for dynamic super goals.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DifficultyKind, GoalRef, GoalStatus};

/// Filter rule selecting the children of a dynamic super goal.
///
/// Every field is optional and an absent or empty field places no
/// constraint. Populated fields combine with AND; within `tags` a single
/// shared tag is enough.
///
/// The JSON form is what gets persisted, and absent fields stay absent:
///
/// ```rust
/// use summit_core::models::{DifficultyKind, Rule};
///
/// let rule = Rule::new()
///     .with_difficulties([DifficultyKind::Easy, DifficultyKind::Hard])
///     .exclude_completed();
/// let json = serde_json::to_string(&rule)?;
/// assert_eq!(json, r#"{"difficulties":["easy","hard"],"excludeCompleted":true}"#);
///
/// let back: Rule = serde_json::from_str(&json)?;
/// assert_eq!(back, rule);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Allowed difficulties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulties: Option<Vec<DifficultyKind>>,

    /// A goal matches when it carries at least one of these tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Allowed statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<GoalStatus>>,

    /// Only match focus goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_only: Option<bool>,

    /// Never match completed goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_completed: Option<bool>,
}

impl Rule {
    /// Creates the empty rule, which matches every eligible goal.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = DifficultyKind>) -> Self {
        self.difficulties = Some(difficulties.into_iter().collect());
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = GoalStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn focus_only(mut self) -> Self {
        self.focus_only = Some(true);
        self
    }

    pub fn exclude_completed(mut self) -> Self {
        self.exclude_completed = Some(true);
        self
    }

    pub fn difficulties(&self) -> &[DifficultyKind] {
        self.difficulties.as_deref().unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn statuses(&self) -> &[GoalStatus] {
        self.statuses.as_deref().unwrap_or_default()
    }

    pub fn is_focus_only(&self) -> bool {
        self.focus_only.unwrap_or(false)
    }

    pub fn excludes_completed(&self) -> bool {
        self.exclude_completed.unwrap_or(false)
    }

    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.difficulties().is_empty()
            && self.tags().is_empty()
            && self.statuses().is_empty()
            && !self.is_focus_only()
            && !self.excludes_completed()
    }

    /// Whether `goal` satisfies every populated field of this rule.
    pub fn matches<G: GoalRef + ?Sized>(&self, goal: &G) -> bool {
        crate::engine::goal_matches_rule(goal, self)
    }

    /// Adds the difficulty if absent, removes it otherwise.
    pub fn toggle_difficulty(&mut self, difficulty: DifficultyKind) {
        toggle(self.difficulties.get_or_insert_with(Vec::new), difficulty);
    }

    /// Adds the tag if absent, removes it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(self.tags.get_or_insert_with(Vec::new), tag.to_string());
    }

    /// Adds the status if absent, removes it otherwise.
    pub fn toggle_status(&mut self, status: GoalStatus) {
        toggle(self.statuses.get_or_insert_with(Vec::new), status);
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(index) = values.iter().position(|existing| *existing == value) {
        values.remove(index);
    } else {
        values.push(value);
    }
}
