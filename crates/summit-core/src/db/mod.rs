//! Database operations and SQLite management for goals and super goals.
//!
//! Super goals are stored as rows of the `goals` table with
//! `goal_type = 'super'`; their membership triple lives in the `is_dynamic`,
//! `rule` and `child_goal_ids` columns.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod goal_queries;
pub mod migrations;
mod rows;
pub mod super_goal_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening database at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
