use chrono::NaiveDateTime;

/// Stable handle on a stored entry (the SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub i64);

/// A study session as stored in the `learning` table
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    /// Day (and time of day) the session is attributed to
    pub learning_date: NaiveDateTime,
    pub genre: String,
    /// Duration in minutes, 1..=1440
    pub minutes: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Values gathered by the create and edit flows
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub learning_date: NaiveDateTime,
    pub genre: String,
    pub minutes: u32,
}
