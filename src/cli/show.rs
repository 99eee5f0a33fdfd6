use std::path::PathBuf;

use crate::display::print_markdown;
use crate::error::Result;
use crate::recorder::{daily_report, genre_report};
use crate::renderer::{render_daily_report, render_genre_report};

/// Print the study-time report, per genre or per day
pub fn run(config_path: Option<PathBuf>, daily: bool, json: bool) -> Result<()> {
    let (config, store) = super::open(config_path)?;

    if daily {
        let totals = daily_report(&store)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&totals)?);
        } else {
            print_markdown(&render_daily_report(&totals));
        }
    } else {
        let report = genre_report(&store, &config)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_markdown(&render_genre_report(&report));
        }
    }

    Ok(())
}
