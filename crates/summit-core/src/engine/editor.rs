//! Draft editing and live preview of a super goal before it is saved.

use log::debug;
use serde::Serialize;

use super::{compute_super_goal_progress, promote_to_dynamic, snapshot_to_static};
use crate::{
    error::{Result, TrackerError},
    models::{
        Difficulty, DifficultyKind, GoalRef, GoalStatus, ProgressSummary, ResolvedChild, Rule,
        SuperGoal,
    },
};

/// Live result of evaluating a draft against the goal set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub children: Vec<ResolvedChild>,
    pub progress: ProgressSummary,
}

/// Checks that `goal_id` names an existing standard goal.
///
/// # Errors
///
/// Returns `TrackerError::GoalNotFound` for unknown ids and
/// `TrackerError::InvalidInput` for super goals.
pub fn ensure_selectable<G: GoalRef>(goal_id: u64, goals: &[G]) -> Result<()> {
    let goal = goals
        .iter()
        .find(|goal| goal.id() == goal_id)
        .ok_or(TrackerError::GoalNotFound { id: goal_id })?;
    if goal.is_super() {
        return Err(TrackerError::invalid_input("child_goal_ids")
            .with_reason(format!("Goal {goal_id} is a super goal")));
    }
    Ok(())
}

/// Holds the last committed state of a super goal next to an editable draft.
///
/// Edits only ever touch the draft. [`SuperGoalEditor::commit`] hands out
/// the candidate to persist; once the store accepts it, call
/// [`SuperGoalEditor::mark_committed`]. If the write fails, the committed
/// state is still the source of truth and the draft can be discarded.
#[derive(Debug, Clone)]
pub struct SuperGoalEditor {
    committed: SuperGoal,
    draft: SuperGoal,
}

impl SuperGoalEditor {
    pub fn new(super_goal: SuperGoal) -> Self {
        Self {
            draft: super_goal.clone(),
            committed: super_goal,
        }
    }

    pub fn committed(&self) -> &SuperGoal {
        &self.committed
    }

    pub fn draft(&self) -> &SuperGoal {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.draft.description = description;
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.draft.difficulty = difficulty;
    }

    /// Replaces the draft rule. Static drafts keep it for a later promote.
    pub fn set_rule(&mut self, rule: Rule) {
        self.draft.rule = Some(rule);
    }

    pub fn toggle_difficulty(&mut self, difficulty: DifficultyKind) {
        self.draft_rule().toggle_difficulty(difficulty);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.draft_rule().toggle_tag(tag);
    }

    pub fn toggle_status(&mut self, status: GoalStatus) {
        self.draft_rule().toggle_status(status);
    }

    /// Clearing the flag on a draft without a rule leaves it without one.
    pub fn set_focus_only(&mut self, focus_only: bool) {
        if focus_only {
            self.draft_rule().focus_only = Some(true);
        } else if let Some(rule) = self.draft.rule.as_mut().filter(|rule| rule.is_focus_only()) {
            rule.focus_only = None;
        }
    }

    pub fn set_exclude_completed(&mut self, exclude_completed: bool) {
        if exclude_completed {
            self.draft_rule().exclude_completed = Some(true);
        } else if let Some(rule) = self
            .draft
            .rule
            .as_mut()
            .filter(|rule| rule.excludes_completed())
        {
            rule.exclude_completed = None;
        }
    }

    /// Adds a goal to a static draft's selection.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the draft is dynamic or the
    /// goal is a super goal (this one included), and
    /// `TrackerError::GoalNotFound` for unknown ids.
    pub fn select_child<G: GoalRef>(&mut self, goal_id: u64, goals: &[G]) -> Result<()> {
        if self.draft.is_dynamic {
            return Err(TrackerError::invalid_input("child_goal_ids")
                .with_reason("Dynamic super goals derive children from their rule"));
        }
        if goal_id == self.draft.id {
            return Err(TrackerError::invalid_input("child_goal_ids")
                .with_reason("A super goal cannot contain itself"));
        }

        ensure_selectable(goal_id, goals)?;

        if !self.draft.child_goal_ids.contains(&goal_id) {
            self.draft.child_goal_ids.push(goal_id);
        }
        Ok(())
    }

    /// Removes a goal from the draft selection, returning whether it was
    /// selected. Missing references can be removed this way too.
    pub fn deselect_child(&mut self, goal_id: u64) -> bool {
        let before = self.draft.child_goal_ids.len();
        self.draft.child_goal_ids.retain(|id| *id != goal_id);
        self.draft.child_goal_ids.len() != before
    }

    /// Snapshots the draft's current matches into a static selection.
    pub fn switch_to_static<G: GoalRef>(&mut self, goals: &[G]) {
        self.draft = snapshot_to_static(&self.draft, goals);
    }

    /// Promotes the draft to dynamic membership.
    pub fn switch_to_dynamic(&mut self, rule: Option<Rule>) {
        self.draft = promote_to_dynamic(&self.draft, rule);
    }

    /// Evaluates the draft against the goal set as it is right now.
    pub fn preview<G: GoalRef>(&self, goals: &[G]) -> Preview {
        let children = self.draft.resolve(goals);
        let progress = compute_super_goal_progress(&children);
        Preview { children, progress }
    }

    /// The candidate state to persist.
    pub fn commit(&self) -> SuperGoal {
        debug!(
            "committing super goal {} draft (dynamic: {})",
            self.draft.id, self.draft.is_dynamic
        );
        self.draft.clone()
    }

    /// Records the state the store accepted as the new baseline.
    pub fn mark_committed(&mut self, saved: SuperGoal) {
        self.draft = saved.clone();
        self.committed = saved;
    }

    /// Throws away every uncommitted edit.
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }

    fn draft_rule(&mut self) -> &mut Rule {
        self.draft.rule.get_or_insert_with(Rule::default)
    }
}
