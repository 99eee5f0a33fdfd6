use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest accepted `limits.dates_range`, one year of days
pub const MAX_DATES_RANGE: u32 = 365;

/// StudyLog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding the `learning` table
    pub database: PathBuf,

    /// Genres offered by the genre picker, in display order
    pub genres: Vec<String>,

    /// Listing limits
    pub limits: Limits,

    /// Study goal used by the genre report
    pub goal: Goal,
}

/// Limits for the pickers and the recent-entries listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Days offered before today by the date picker; also the listing window
    pub dates_range: u32,

    /// Maximum rows shown when choosing an entry to edit or delete
    pub display_limit: u32,
}

/// Goal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    /// Hours of study needed to "go pro"
    pub hours: f64,
}

impl Config {
    /// Whether `genre` is one of the configured genres
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Reject values the pickers cannot work with
    pub fn validate(&self) -> Result<(), String> {
        if self.limits.dates_range > MAX_DATES_RANGE {
            return Err(format!(
                "limits.dates_range = {} is out of range (at most {})",
                self.limits.dates_range, MAX_DATES_RANGE
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("learning.sqlite3"),
            genres: vec![
                "ruby".to_string(),
                "javascript".to_string(),
                "infra".to_string(),
                "html/css".to_string(),
            ],
            limits: Limits::default(),
            goal: Goal::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            dates_range: 7,
            display_limit: 20,
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self { hours: 10000.0 }
    }
}
