//! Row decoding helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use jiff::Timestamp;
use rusqlite::{Row, types::Type};
use serde::de::DeserializeOwned;

use crate::models::{Goal, SuperGoal};

pub(super) const GOAL_COLUMNS: &str =
    "id, name, description, difficulty, status, is_focus, tags, goal_type, created_at, updated_at";

pub(super) const SUPER_GOAL_COLUMNS: &str =
    "id, name, description, difficulty, is_dynamic, rule, child_goal_ids, created_at, updated_at";

fn invalid_data(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn parsed<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    row.get::<_, Option<String>>(idx)?
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| invalid_data(idx, format!("Invalid value '{raw}': {e}")))
        })
        .transpose()
}

fn json<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>> {
    row.get::<_, Option<String>>(idx)?
        .map(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
        })
        .transpose()
}

/// Decodes a row selected with [`GOAL_COLUMNS`].
pub(super) fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        difficulty: parsed(row, 3)?,
        status: parsed(row, 4)?,
        is_focus: row.get(5)?,
        tags: json(row, 6)?.unwrap_or_default(),
        goal_type: parsed(row, 7)?.unwrap_or_default(),
        created_at: timestamp(row, 8)?,
        updated_at: timestamp(row, 9)?,
    })
}

/// Decodes a row selected with [`SUPER_GOAL_COLUMNS`].
pub(super) fn super_goal_from_row(row: &Row<'_>) -> rusqlite::Result<SuperGoal> {
    Ok(SuperGoal {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        difficulty: parsed(row, 3)?,
        is_dynamic: row.get(4)?,
        rule: json(row, 5)?,
        child_goal_ids: json(row, 6)?.unwrap_or_default(),
        created_at: timestamp(row, 7)?,
        updated_at: timestamp(row, 8)?,
    })
}
