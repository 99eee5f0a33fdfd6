//! Text renderer module
//!
//! Fixed-width entry lines for the selection menus, date picker labels, and
//! the Markdown reports printed by `show`.

use chrono::{Datelike, NaiveDate};

use crate::models::{minutes_to_hours, DailyTotal, Entry, GenreReport};

/// Column width for left-justified fields
const LJUST: usize = 15;

/// Column width for the right-justified duration
const RJUST: usize = 5;

const SEPARATOR: &str = "----------------------------";

/// Format an entry as one menu line: date and genre left-justified to 15
/// columns, minutes right-justified to 5 columns
pub fn entry_line(entry: &Entry) -> String {
    format!(
        "{:<LJUST$}{:<LJUST$}{:>RJUST$} minutes",
        entry.learning_date.format("%Y/%-m/%-d").to_string(),
        entry.genre,
        entry.minutes
    )
}

/// Label for the date picker, e.g. `5/4 (Sat)`
pub fn date_label(date: NaiveDate) -> String {
    format!("{}/{} ({})", date.month(), date.day(), date.weekday())
}

/// Render totals per genre, the grand total, and the remaining goal
pub fn render_genre_report(report: &GenreReport) -> String {
    let mut output = String::new();

    output.push_str("## Your total study time (hours)\n\n");
    output.push_str("```\n");
    for total in &report.totals {
        output.push_str(&format!(
            "{:<LJUST$}{} hours\n",
            total.genre,
            minutes_to_hours(total.minutes)
        ));
    }
    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!(
        "{:<LJUST$}{} hours\n",
        "total",
        report.total_hours()
    ));
    output.push_str("```\n\n");

    output.push_str(&format!(
        "Your time of study remaining to be pro is **{}** hours.\n\n",
        report.remaining_hours()
    ));
    output.push_str("Keep studying is the key to success!!");

    output
}

/// Render totals per calendar day, newest first
pub fn render_daily_report(totals: &[DailyTotal]) -> String {
    let mut output = String::new();

    output.push_str("## Your total study time in a day (hours)\n\n");
    output.push_str("```\n");
    for total in totals {
        output.push_str(&format!(
            "{:<LJUST$} {:<LJUST$} {} hours\n",
            total.day,
            total.genres,
            minutes_to_hours(total.minutes)
        ));
    }
    output.push_str("```");

    output
}
