//! Goal operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{Goal, GoalFilter},
    params::{CreateGoal, Id, UpdateGoal},
};

impl Tracker {
    /// Creates a new standard goal.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        params.validate()?;
        let params = params.clone();

        self.with_database(move |db| db.create_goal(&params)).await
    }

    /// Retrieves a goal record by its ID.
    pub async fn get_goal(&self, params: &Id) -> Result<Option<Goal>> {
        let goal_id = params.id;

        self.with_database(move |db| db.get_goal(goal_id)).await
    }

    /// Lists goal records with optional field-equality filtering.
    pub async fn list_goals(&self, filter: Option<GoalFilter>) -> Result<Vec<Goal>> {
        self.with_database(move |db| db.list_goals(filter.as_ref()))
            .await
    }

    /// Applies a partial update to a goal.
    ///
    /// Super goals resolve against the goal set on every read, so dynamic
    /// memberships pick the change up on their next resolution.
    pub async fn update_goal(&self, params: &UpdateGoal) -> Result<Goal> {
        params.validate()?;
        let params = params.clone();

        self.with_database(move |db| db.update_goal(&params)).await
    }

    /// Permanently deletes a goal record. This operation cannot be undone.
    pub async fn delete_goal_by_id(&self, params: &Id) -> Result<()> {
        let goal_id = params.id;

        self.with_database(move |db| db.delete_goal(goal_id)).await
    }
}
