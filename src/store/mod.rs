//! Storage module
//!
//! Wraps the single SQLite connection used for a run. Entries are addressed
//! by rowid; every recency ordering breaks date ties on rowid so that the
//! listing and offset lookups agree.

mod schema;
mod timestamp;

use timestamp::DbDateTime;

use chrono::NaiveDateTime;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Result, StudyLogError};
use crate::models::{DailyTotal, Entry, EntryId, GenreTotal, NewEntry};
use schema::create_schema;

const SELECT_ENTRY: &str = "SELECT rowid, learning_date, genre,
        CAST(learning_time AS INTEGER), created_at, updated_at
    FROM learning";

const RECENCY_ORDER: &str = "ORDER BY learning_date DESC, rowid DESC";

/// Local study journal backed by one SQLite connection
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file and make sure the table exists
    pub fn open(path: &Path) -> Result<Self> {
        debug!("opening database {}", path.display());
        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a new entry stamped with `now` and return its id
    pub fn insert(&self, entry: &NewEntry, now: NaiveDateTime) -> Result<EntryId> {
        self.conn.execute(
            "INSERT INTO learning (learning_date, genre, learning_time, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                DbDateTime(entry.learning_date),
                entry.genre,
                entry.minutes,
                DbDateTime(now),
                DbDateTime(now),
            ],
        )?;

        let id = EntryId(self.conn.last_insert_rowid());
        debug!("inserted entry {:?}", id);
        Ok(id)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{} WHERE rowid = ?1", SELECT_ENTRY),
                params![id.0],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    /// Rewrite every field of the entry except `created_at`
    pub fn update(&self, id: EntryId, entry: &NewEntry, now: NaiveDateTime) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE learning
                SET learning_date = ?1, genre = ?2, learning_time = ?3, updated_at = ?4
                WHERE rowid = ?5",
            params![
                DbDateTime(entry.learning_date),
                entry.genre,
                entry.minutes,
                DbDateTime(now),
                id.0,
            ],
        )?;

        if changed == 0 {
            return Err(StudyLogError::NoRows);
        }
        debug!("updated entry {:?}", id);
        Ok(())
    }

    pub fn delete(&self, id: EntryId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM learning WHERE rowid = ?1", params![id.0])?;

        if changed == 0 {
            return Err(StudyLogError::NoRows);
        }
        debug!("deleted entry {:?}", id);
        Ok(())
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM learning", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Entries dated at or after `since`, most recent first
    pub fn list_recent(&self, since: NaiveDateTime, limit: u32) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE learning_date >= ?1 {} LIMIT ?2",
            SELECT_ENTRY, RECENCY_ORDER
        ))?;

        let rows = stmt.query_map(params![DbDateTime(since), limit], entry_from_row)?;
        let entries = rows.collect::<rusqlite::Result<Vec<Entry>>>()?;
        debug!("{} recent entries since {}", entries.len(), since);
        Ok(entries)
    }

    /// Id of the `(offset + 1)`-th most recent entry over the whole table
    pub fn id_at_offset(&self, offset: usize) -> Result<Option<EntryId>> {
        let id = self
            .conn
            .query_row(
                &format!(
                    "SELECT rowid FROM learning {} LIMIT 1 OFFSET ?1",
                    RECENCY_ORDER
                ),
                params![offset as i64],
                |row| row.get(0).map(EntryId),
            )
            .optional()?;
        Ok(id)
    }

    pub fn totals_by_genre(&self) -> Result<Vec<GenreTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT genre, COALESCE(SUM(CAST(learning_time AS INTEGER)), 0)
                FROM learning GROUP BY genre ORDER BY genre",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(GenreTotal {
                genre: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                minutes: row.get(1)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<Vec<GenreTotal>>>()?)
    }

    pub fn total_minutes(&self) -> Result<i64> {
        let total = self.conn.query_row(
            "SELECT COALESCE(SUM(CAST(learning_time AS INTEGER)), 0) FROM learning",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Minutes and distinct genres per calendar day, newest day first
    pub fn totals_by_day(&self) -> Result<Vec<DailyTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT strftime('%Y-%m-%d', learning_date) AS day,
                    GROUP_CONCAT(DISTINCT genre),
                    COALESCE(SUM(CAST(learning_time AS INTEGER)), 0)
                FROM learning
                WHERE strftime('%Y-%m-%d', learning_date) IS NOT NULL
                GROUP BY day
                ORDER BY day DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DailyTotal {
                day: row.get(0)?,
                genres: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                minutes: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<Vec<DailyTotal>>>()?)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let learning_date: DbDateTime = row.get(1)?;
    let created_at: DbDateTime = row.get(4)?;
    let updated_at: DbDateTime = row.get(5)?;

    Ok(Entry {
        id: EntryId(row.get(0)?),
        learning_date: learning_date.0,
        genre: row.get(2)?,
        minutes: row.get(3)?,
        created_at: created_at.0,
        updated_at: updated_at.0,
    })
}
