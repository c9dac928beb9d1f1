//! Goal CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::rows::{GOAL_COLUMNS, goal_from_row};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Goal, GoalFilter, GoalType},
    params::{CreateGoal, UpdateGoal},
};

const INSERT_GOAL_SQL: &str = "INSERT INTO goals (name, description, difficulty, status, is_focus, tags, goal_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)";
const UPDATE_GOAL_SQL: &str = "UPDATE goals SET name = ?1, description = ?2, difficulty = ?3, status = ?4, is_focus = ?5, tags = ?6, goal_type = ?7, updated_at = ?8 WHERE id = ?9";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";

impl super::Database {
    /// Creates a new standard goal. Status defaults to `not_started`.
    pub fn create_goal(&mut self, params: &CreateGoal) -> Result<Goal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let status = params.status.unwrap_or_default();
        let tags = serde_json::to_string(&params.tags)?;
        let difficulty = params.difficulty.as_ref().map(ToString::to_string);

        tx.execute(
            INSERT_GOAL_SQL,
            params![
                &params.name,
                params.description.as_deref(),
                difficulty,
                status.as_str(),
                params.is_focus,
                tags,
                GoalType::Standard.as_str(),
                &now_str
            ],
        )
        .db_context("Failed to insert goal")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("created goal {id}");

        Ok(Goal {
            id,
            name: params.name.clone(),
            description: params.description.clone(),
            difficulty: params.difficulty.clone(),
            status: Some(status),
            is_focus: params.is_focus,
            tags: params.tags.clone(),
            goal_type: GoalType::Standard,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a goal record by its ID, super goals included.
    pub fn get_goal(&self, id: u64) -> Result<Option<Goal>> {
        self.connection
            .query_row(
                &format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1"),
                params![id as i64],
                goal_from_row,
            )
            .optional()
            .db_context("Failed to query goal")
    }

    /// Lists goal records in creation order, filtered by field equality.
    pub fn list_goals(&self, filter: Option<&GoalFilter>) -> Result<Vec<Goal>> {
        let mut query = format!("SELECT {GOAL_COLUMNS} FROM goals");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(goal_type) = f.goal_type {
                conditions.push("goal_type = ?");
                params_vec.push(Box::new(goal_type.as_str()));
            }

            if let Some(status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str()));
            }

            if let Some(is_focus) = f.is_focus {
                conditions.push("is_focus = ?");
                params_vec.push(Box::new(is_focus));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let goals = stmt
            .query_map(&params_refs[..], goal_from_row)
            .db_context("Failed to query goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch goals")?;
        Ok(goals)
    }

    /// Applies the populated fields of `params` and returns the updated goal.
    pub fn update_goal(&mut self, params: &UpdateGoal) -> Result<Goal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut goal = tx
            .query_row(
                &format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1"),
                params![params.id as i64],
                goal_from_row,
            )
            .optional()
            .db_context("Failed to query goal")?
            .ok_or(TrackerError::GoalNotFound { id: params.id })?;

        if let Some(name) = &params.name {
            goal.name = name.clone();
        }
        if let Some(description) = &params.description {
            goal.description = Some(description.clone());
        }
        if let Some(difficulty) = &params.difficulty {
            goal.difficulty = Some(difficulty.clone());
        }
        if let Some(status) = params.status {
            goal.status = Some(status);
        }
        if let Some(is_focus) = params.is_focus {
            goal.is_focus = is_focus;
        }
        if let Some(tags) = &params.tags {
            goal.tags = tags.clone();
        }
        if let Some(goal_type) = params.goal_type {
            goal.goal_type = goal_type;
        }
        goal.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_GOAL_SQL,
            params![
                &goal.name,
                goal.description.as_deref(),
                goal.difficulty.as_ref().map(ToString::to_string),
                goal.status.map(|status| status.as_str()),
                goal.is_focus,
                serde_json::to_string(&goal.tags)?,
                goal.goal_type.as_str(),
                goal.updated_at.to_string(),
                goal.id as i64
            ],
        )
        .db_context("Failed to update goal")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("updated goal {}", goal.id);

        Ok(goal)
    }

    /// Permanently deletes a goal record.
    ///
    /// Static super goals referencing it keep the id and report it as a
    /// missing child from then on.
    pub fn delete_goal(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_GOAL_SQL, params![id as i64])
            .db_context("Failed to delete goal")?;

        if rows_affected == 0 {
            return Err(TrackerError::GoalNotFound { id });
        }

        debug!("deleted goal {id}");
        Ok(())
    }
}
