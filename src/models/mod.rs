//! Data models module
//!
//! Defines the stored entry and the aggregate report rows.

pub mod entry;
pub mod report;

pub use entry::{Entry, EntryId, NewEntry};
pub use report::{minutes_to_hours, DailyTotal, GenreReport, GenreTotal};
