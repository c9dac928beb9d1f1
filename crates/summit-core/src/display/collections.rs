//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Goal, SuperGoalSummary};

/// Newtype wrapper for displaying a list of goals.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use summit_core::{
///     display::Goals,
///     models::{Goal, GoalStatus, GoalType},
/// };
///
/// let goal = Goal {
///     id: 1,
///     name: "Read 12 books".to_string(),
///     description: None,
///     difficulty: None,
///     status: Some(GoalStatus::InProgress),
///     is_focus: false,
///     tags: vec!["reading".to_string()],
///     goal_type: GoalType::Standard,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = Goals(vec![goal]).to_string();
/// assert!(output.contains("Read 12 books"));
/// ```
pub struct Goals(pub Vec<Goal>);

impl Goals {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.0.iter()
    }
}

impl Index<usize> for Goals {
    type Output = Goal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Goals {
    type Item = Goal;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Goals {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No goals found.")
        } else {
            for goal in &self.0 {
                write!(f, "{goal}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying super goal summaries.
pub struct SuperGoalSummaries(pub Vec<SuperGoalSummary>);

impl SuperGoalSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SuperGoalSummary> {
        self.0.iter()
    }
}

impl Index<usize> for SuperGoalSummaries {
    type Output = SuperGoalSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SuperGoalSummaries {
    type Item = &'a SuperGoalSummary;
    type IntoIter = std::slice::Iter<'a, SuperGoalSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SuperGoalSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No super goals found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
