//! Filter types for querying goals.

use super::{GoalStatus, GoalType};

/// Field-equality filter for listing goals from the store.
///
/// Every populated field must match exactly; an empty filter lists every
/// goal, super goals included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalFilter {
    /// Only goals of this type
    pub goal_type: Option<GoalType>,

    /// Only goals with this status
    pub status: Option<GoalStatus>,

    /// Only goals with this focus flag
    pub is_focus: Option<bool>,
}

impl GoalFilter {
    /// Filter for ordinary goals, the only ones a super goal may contain.
    ///
    /// ```rust
    /// use summit_core::models::{GoalFilter, GoalType};
    ///
    /// let filter = GoalFilter::standard();
    /// assert_eq!(filter.goal_type, Some(GoalType::Standard));
    /// assert_eq!(filter.status, None);
    /// ```
    pub fn standard() -> Self {
        Self {
            goal_type: Some(GoalType::Standard),
            ..Default::default()
        }
    }
}

impl From<&crate::params::ListGoals> for GoalFilter {
    fn from(params: &crate::params::ListGoals) -> Self {
        Self {
            goal_type: (!params.include_super).then_some(GoalType::Standard),
            status: params.status,
            is_focus: params.focus_only.then_some(true),
        }
    }
}
