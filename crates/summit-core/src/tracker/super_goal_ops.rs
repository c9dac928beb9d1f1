//! Super goal operations for the Tracker.
//!
//! Every edit loads the committed super goal and the current goal set, applies
//! the change to a [`SuperGoalEditor`] draft, and saves the candidate in one
//! transaction. A failed save leaves the stored super goal as it was.

use log::debug;

use super::Tracker;
use crate::{
    engine::{
        Preview, SuperGoalEditor, compute_super_goal_progress, ensure_selectable,
        filter_goals_by_rule,
    },
    error::{Result, TrackerError},
    models::{Goal, GoalRef, MembershipRecord, ResolvedChild, SuperGoal},
    params::{
        CreateSuperGoal, Id, PreviewRule, PromoteSuperGoal, SelectChildren, SetRule,
        UpdateSuperGoal,
    },
};

impl Tracker {
    /// Creates a super goal. Static children must be existing standard goals.
    pub async fn create_super_goal(&self, params: &CreateSuperGoal) -> Result<SuperGoal> {
        params.validate()?;
        let params = params.clone();

        self.with_database(move |db| {
            if !params.child_goal_ids.is_empty() {
                let goals = db.list_goals(None)?;
                for &goal_id in &params.child_goal_ids {
                    ensure_selectable(goal_id, &goals)?;
                }
            }
            db.create_super_goal(&params)
        })
        .await
    }

    /// Retrieves a super goal by its ID.
    pub async fn get_super_goal(&self, params: &Id) -> Result<Option<SuperGoal>> {
        let super_goal_id = params.id;

        self.with_database(move |db| db.get_super_goal(super_goal_id))
            .await
    }

    /// Lists every super goal.
    pub async fn list_super_goals(&self) -> Result<Vec<SuperGoal>> {
        self.with_database(|db| db.list_super_goals()).await
    }

    /// Overwrites the stored membership triple of a super goal as-is.
    pub async fn update_super_goal_membership(
        &self,
        id: u64,
        record: MembershipRecord,
    ) -> Result<SuperGoal> {
        self.with_database(move |db| db.update_super_goal_membership(id, &record))
            .await
    }

    /// Loads a super goal into an editor, applies `edit`, and saves the draft
    /// if it changed.
    ///
    /// `edit` sees the goal set as it is at load time. When it fails, nothing
    /// is written.
    pub async fn edit_super_goal<F>(&self, id: u64, edit: F) -> Result<SuperGoal>
    where
        F: FnOnce(&mut SuperGoalEditor, &[Goal]) -> Result<()> + Send + 'static,
    {
        self.with_database(move |db| {
            let super_goal = db
                .get_super_goal(id)?
                .ok_or(TrackerError::SuperGoalNotFound { id })?;
            let goals = db.list_goals(None)?;

            let mut editor = SuperGoalEditor::new(super_goal);
            edit(&mut editor, &goals)?;

            if !editor.is_dirty() {
                debug!("super goal {id} unchanged, nothing to save");
                return Ok(editor.committed().clone());
            }
            db.save_super_goal(&editor.commit())
        })
        .await
    }

    /// Applies the populated detail fields of `params`.
    pub async fn update_super_goal(&self, params: &UpdateSuperGoal) -> Result<SuperGoal> {
        params.validate()?;
        let UpdateSuperGoal {
            id,
            name,
            description,
            difficulty,
        } = params.clone();

        self.edit_super_goal(id, move |editor, _| {
            if let Some(name) = name {
                editor.rename(name);
            }
            if description.is_some() {
                editor.set_description(description);
            }
            if difficulty.is_some() {
                editor.set_difficulty(difficulty);
            }
            Ok(())
        })
        .await
    }

    /// Replaces a super goal's rule.
    pub async fn set_rule(&self, params: &SetRule) -> Result<SuperGoal> {
        let rule = params.rule.clone();

        self.edit_super_goal(params.id, move |editor, _| {
            editor.set_rule(rule);
            Ok(())
        })
        .await
    }

    /// Adds and removes explicit children of a static super goal.
    ///
    /// Removals run first, so an id in both lists ends up selected.
    pub async fn select_children(&self, params: &SelectChildren) -> Result<SuperGoal> {
        let SelectChildren { id, add, remove } = params.clone();

        self.edit_super_goal(id, move |editor, goals| {
            if editor.draft().is_dynamic {
                return Err(TrackerError::invalid_input("child_goal_ids")
                    .with_reason("Dynamic super goals derive children from their rule"));
            }
            for goal_id in remove {
                editor.deselect_child(goal_id);
            }
            for goal_id in add {
                editor.select_child(goal_id, goals)?;
            }
            Ok(())
        })
        .await
    }

    /// Freezes a dynamic super goal's current matches into a static list.
    pub async fn snapshot_super_goal(&self, params: &Id) -> Result<SuperGoal> {
        self.edit_super_goal(params.id, |editor, goals| {
            editor.switch_to_static(goals);
            Ok(())
        })
        .await
    }

    /// Makes a super goal dynamic with the given, retained, or empty rule.
    pub async fn promote_super_goal(&self, params: &PromoteSuperGoal) -> Result<SuperGoal> {
        let rule = params.rule.clone();

        self.edit_super_goal(params.id, move |editor, _| {
            editor.switch_to_dynamic(rule);
            Ok(())
        })
        .await
    }

    /// Evaluates a rule against the current goal set without saving.
    ///
    /// With a `super_goal_id`, the preview is what that super goal would
    /// resolve to if promoted with this rule.
    pub async fn preview_rule(&self, params: &PreviewRule) -> Result<Preview> {
        let PreviewRule {
            rule,
            super_goal_id,
        } = params.clone();

        self.with_database(move |db| {
            let goals = db.list_goals(None)?;

            match super_goal_id {
                Some(id) => {
                    let super_goal = db
                        .get_super_goal(id)?
                        .ok_or(TrackerError::SuperGoalNotFound { id })?;
                    let mut editor = SuperGoalEditor::new(super_goal);
                    editor.switch_to_dynamic(Some(rule));
                    Ok(editor.preview(&goals))
                }
                None => {
                    let eligible: Vec<&Goal> =
                        goals.iter().filter(|goal| !goal.is_super()).collect();
                    let children: Vec<ResolvedChild> = filter_goals_by_rule(&eligible, &rule)
                        .into_iter()
                        .map(ResolvedChild::from_goal)
                        .collect();
                    let progress = compute_super_goal_progress(&children);
                    Ok(Preview { children, progress })
                }
            }
        })
        .await
    }

    /// Permanently deletes a super goal. Its children are untouched.
    pub async fn delete_super_goal_by_id(&self, params: &Id) -> Result<()> {
        let super_goal_id = params.id;

        self.with_database(move |db| db.delete_super_goal(super_goal_id))
            .await
    }
}
