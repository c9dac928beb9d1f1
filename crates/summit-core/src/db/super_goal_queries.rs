//! Super goal persistence, including the membership triple.

use jiff::Timestamp;
use log::debug;
use rusqlite::{OptionalExtension, Transaction, params};

use super::rows::{SUPER_GOAL_COLUMNS, super_goal_from_row};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{GoalType, MembershipRecord, SuperGoal},
    params::CreateSuperGoal,
};

const INSERT_SUPER_GOAL_SQL: &str = "INSERT INTO goals (name, description, difficulty, goal_type, is_dynamic, rule, child_goal_ids, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)";
const UPDATE_MEMBERSHIP_SQL: &str = "UPDATE goals SET is_dynamic = ?1, rule = ?2, child_goal_ids = ?3, updated_at = ?4 WHERE id = ?5 AND goal_type = 'super'";
const UPDATE_DETAILS_SQL: &str = "UPDATE goals SET name = ?1, description = ?2, difficulty = ?3, updated_at = ?4 WHERE id = ?5 AND goal_type = 'super'";
const DELETE_SUPER_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1 AND goal_type = 'super'";

/// JSON columns for a membership triple.
fn membership_columns(record: &MembershipRecord) -> Result<(Option<String>, Option<String>)> {
    let rule = record.rule.as_ref().map(serde_json::to_string).transpose()?;
    let child_goal_ids = record
        .child_goal_ids
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    Ok((rule, child_goal_ids))
}

fn select_super_goal(tx: &Transaction<'_>, id: u64) -> Result<SuperGoal> {
    tx.query_row(
        &format!("SELECT {SUPER_GOAL_COLUMNS} FROM goals WHERE id = ?1 AND goal_type = 'super'"),
        params![id as i64],
        super_goal_from_row,
    )
    .optional()
    .db_context("Failed to query super goal")?
    .ok_or(TrackerError::SuperGoalNotFound { id })
}

fn write_membership(
    tx: &Transaction<'_>,
    id: u64,
    record: &MembershipRecord,
    now: &str,
) -> Result<()> {
    let (rule, child_goal_ids) = membership_columns(record)?;
    let rows_affected = tx
        .execute(
            UPDATE_MEMBERSHIP_SQL,
            params![record.is_dynamic, rule, child_goal_ids, now, id as i64],
        )
        .db_context("Failed to update super goal membership")?;

    if rows_affected == 0 {
        return Err(TrackerError::SuperGoalNotFound { id });
    }
    Ok(())
}

impl super::Database {
    /// Creates a super goal with its initial membership.
    pub fn create_super_goal(&mut self, params: &CreateSuperGoal) -> Result<SuperGoal> {
        let record = params.membership_record();
        let (rule, child_goal_ids) = membership_columns(&record)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_SUPER_GOAL_SQL,
            params![
                &params.name,
                params.description.as_deref(),
                params.difficulty.as_ref().map(ToString::to_string),
                GoalType::Super.as_str(),
                record.is_dynamic,
                rule,
                child_goal_ids,
                now.to_string()
            ],
        )
        .db_context("Failed to insert super goal")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("created super goal {id} (dynamic: {})", record.is_dynamic);

        let mut super_goal = SuperGoal {
            id,
            name: params.name.clone(),
            description: params.description.clone(),
            difficulty: params.difficulty.clone(),
            is_dynamic: false,
            rule: None,
            child_goal_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        super_goal.apply_membership(record);
        Ok(super_goal)
    }

    /// Retrieves a super goal by its ID.
    ///
    /// Returns `None` when the id is unknown or names a standard goal.
    pub fn get_super_goal(&self, id: u64) -> Result<Option<SuperGoal>> {
        self.connection
            .query_row(
                &format!(
                    "SELECT {SUPER_GOAL_COLUMNS} FROM goals WHERE id = ?1 AND goal_type = 'super'"
                ),
                params![id as i64],
                super_goal_from_row,
            )
            .optional()
            .db_context("Failed to query super goal")
    }

    /// Lists every super goal in creation order.
    pub fn list_super_goals(&self) -> Result<Vec<SuperGoal>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {SUPER_GOAL_COLUMNS} FROM goals WHERE goal_type = 'super' ORDER BY id ASC"
            ))
            .db_context("Failed to prepare query")?;

        let super_goals = stmt
            .query_map([], super_goal_from_row)
            .db_context("Failed to query super goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch super goals")?;
        Ok(super_goals)
    }

    /// Overwrites the membership triple of a super goal in one transaction.
    ///
    /// Writing the same record twice leaves the same row. On error nothing
    /// is written.
    pub fn update_super_goal_membership(
        &mut self,
        id: u64,
        record: &MembershipRecord,
    ) -> Result<SuperGoal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        write_membership(&tx, id, record, &Timestamp::now().to_string())?;
        let saved = select_super_goal(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("saved membership of super goal {id}");

        Ok(saved)
    }

    /// Persists a committed editor candidate: details and membership
    /// together.
    pub fn save_super_goal(&mut self, super_goal: &SuperGoal) -> Result<SuperGoal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(
            UPDATE_DETAILS_SQL,
            params![
                &super_goal.name,
                super_goal.description.as_deref(),
                super_goal.difficulty.as_ref().map(ToString::to_string),
                &now,
                super_goal.id as i64
            ],
        )
        .db_context("Failed to update super goal")?;
        write_membership(&tx, super_goal.id, &super_goal.membership_record(), &now)?;
        let saved = select_super_goal(&tx, super_goal.id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("saved super goal {}", super_goal.id);

        Ok(saved)
    }

    /// Permanently deletes a super goal. Its children are untouched.
    pub fn delete_super_goal(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_SUPER_GOAL_SQL, params![id as i64])
            .db_context("Failed to delete super goal")?;

        if rows_affected == 0 {
            return Err(TrackerError::SuperGoalNotFound { id });
        }

        debug!("deleted super goal {id}");
        Ok(())
    }
}
