use rusqlite::Connection;

use crate::error::Result;

/// Create the `learning` table and its date index if absent
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS learning (
            learning_date TEXT,
            genre TEXT,
            learning_time TEXT,
            created_at TEXT,
            updated_at TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_learning_date
            ON learning (learning_date);

        COMMIT;",
    )?;

    Ok(())
}
