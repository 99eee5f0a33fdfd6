use serde::Serialize;

/// Minutes summed for one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTotal {
    pub genre: String,
    pub minutes: i64,
}

/// Minutes summed for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    /// `YYYY-MM-DD`
    pub day: String,
    /// Distinct genres studied that day, comma separated
    pub genres: String,
    pub minutes: i64,
}

/// Totals per genre plus the grand total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreReport {
    pub totals: Vec<GenreTotal>,
    pub total_minutes: i64,
    pub goal_hours: f64,
}

impl GenreReport {
    pub fn total_hours(&self) -> f64 {
        minutes_to_hours(self.total_minutes)
    }

    /// Hours still missing to reach the goal, one decimal place
    pub fn remaining_hours(&self) -> f64 {
        round_tenth(self.goal_hours - self.total_hours())
    }
}

/// Convert minutes to hours rounded to one decimal place
pub fn minutes_to_hours(minutes: i64) -> f64 {
    round_tenth(minutes as f64 / 60.0)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
