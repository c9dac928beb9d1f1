//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Columns added to `goals` after the first release, with their DDL.
const MEMBERSHIP_COLUMNS: [(&str, &str); 3] = [
    (
        "is_dynamic",
        "ALTER TABLE goals ADD COLUMN is_dynamic INTEGER NOT NULL DEFAULT 0",
    ),
    ("rule", "ALTER TABLE goals ADD COLUMN rule TEXT"),
    (
        "child_goal_ids",
        "ALTER TABLE goals ADD COLUMN child_goal_ids TEXT",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Adds super goal membership columns to databases created before super
    /// goals existed.
    fn apply_migrations(&self) -> Result<()> {
        for (column, ddl) in MEMBERSHIP_COLUMNS {
            let has_column: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('goals') WHERE name = ?1",
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect goals table")?;

            if !has_column {
                info!("migrating goals table: adding column {column}");
                self.connection
                    .execute(ddl, [])
                    .db_context("Failed to add membership column to goals table")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::Database;

    #[test]
    fn test_migrates_pre_super_goal_database() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legacy.db");

        let legacy = Connection::open(&path).unwrap();
        legacy
            .execute_batch(
                "CREATE TABLE goals (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    description TEXT,
                    difficulty TEXT,
                    status TEXT,
                    is_focus INTEGER NOT NULL DEFAULT 0,
                    tags TEXT NOT NULL DEFAULT '[]',
                    goal_type TEXT NOT NULL DEFAULT 'standard',
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                INSERT INTO goals (name, status, created_at, updated_at)
                VALUES ('Old goal', 'in_progress', '2022-01-01T00:00:00Z', '2022-01-01T00:00:00Z');",
            )
            .unwrap();
        drop(legacy);

        let db = Database::new(&path).expect("migration should succeed");
        let goals = db.list_goals(None).unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, "Old goal");
        assert!(db.list_super_goals().unwrap().is_empty());
    }
}
