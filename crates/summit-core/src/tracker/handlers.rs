//! Handler operations that return display-ready types for the Tracker.

use super::Tracker;
use crate::{
    display::{Goals, SuperGoalSummaries},
    error::{Result, TrackerError},
    models::{Goal, GoalFilter, SuperGoal, SuperGoalDetail, SuperGoalSummary},
    params::{DeleteGoal, Id, ListGoals},
};

fn require_confirmation(params: &DeleteGoal, resource: &str) -> Result<()> {
    if params.confirmed {
        return Ok(());
    }
    Err(TrackerError::invalid_input("confirmed").with_reason(format!(
        "{resource} deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion."
    )))
}

impl Tracker {
    /// Handle listing goals with the filters from `params`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use summit_core::{params::ListGoals, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let goals = tracker.list_goals_result(&ListGoals::default()).await?;
    /// println!("{goals}");
    /// # Result::<(), summit_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_goals_result(&self, params: &ListGoals) -> Result<Goals> {
        let goals = self.list_goals(Some(GoalFilter::from(params))).await?;
        Ok(Goals(goals))
    }

    /// Handle permanently deleting a goal with confirmation.
    ///
    /// Uses get-before-delete to return the deleted goal, or `None` if it
    /// did not exist.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false
    pub async fn delete_goal(&self, params: &DeleteGoal) -> Result<Option<Goal>> {
        require_confirmation(params, "Goal")?;

        let id_params = Id { id: params.id };
        let goal = self.get_goal(&id_params).await?;

        if goal.is_some() {
            self.delete_goal_by_id(&id_params).await?;
        }

        Ok(goal)
    }

    /// Handle showing a super goal with its resolved children and progress.
    ///
    /// The super goal and the goal set are read on the same connection.
    pub async fn show_super_goal(&self, params: &Id) -> Result<Option<SuperGoalDetail>> {
        let super_goal_id = params.id;

        self.with_database(move |db| {
            let Some(super_goal) = db.get_super_goal(super_goal_id)? else {
                return Ok(None);
            };
            let goals = db.list_goals(None)?;
            Ok(Some(SuperGoalDetail::resolve(super_goal, &goals)))
        })
        .await
    }

    /// Handle listing super goals as progress summaries.
    pub async fn list_super_goal_summaries(&self) -> Result<SuperGoalSummaries> {
        self.with_database(|db| {
            let super_goals = db.list_super_goals()?;
            let goals = db.list_goals(None)?;
            let summaries = super_goals
                .iter()
                .map(|super_goal| SuperGoalSummary::from_super_goal(super_goal, &goals))
                .collect();
            Ok(SuperGoalSummaries(summaries))
        })
        .await
    }

    /// Handle permanently deleting a super goal with confirmation.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false
    pub async fn delete_super_goal(&self, params: &DeleteGoal) -> Result<Option<SuperGoal>> {
        require_confirmation(params, "Super goal")?;

        let id_params = Id { id: params.id };
        let super_goal = self.get_super_goal(&id_params).await?;

        if super_goal.is_some() {
            self.delete_super_goal_by_id(&id_params).await?;
        }

        Ok(super_goal)
    }
}
