use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::error::{Result, ValidationError};
use crate::prompt::parse_minutes;
use crate::recorder::{EntryInput, Recorder};

/// Record a study session, asking for anything not given as a flag
pub fn run(
    config_path: Option<PathBuf>,
    date: Option<String>,
    genre: Option<String>,
    minutes: Option<String>,
) -> Result<()> {
    let (config, store) = super::open(config_path)?;
    let input = entry_input(date, genre, minutes)?;

    let mut prompter = super::terminal_prompter();
    let mut recorder = Recorder::new(&store, &config, &mut prompter);
    recorder.create(input, Local::now().naive_local())?;

    println!("Created successfully!");
    Ok(())
}

/// Validate flag values shared by `create` and `edit`
pub(crate) fn entry_input(
    date: Option<String>,
    genre: Option<String>,
    minutes: Option<String>,
) -> Result<EntryInput> {
    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(d))
        })
        .transpose()?;
    let minutes = minutes.as_deref().map(parse_minutes).transpose()?;

    Ok(EntryInput {
        date,
        genre,
        minutes,
    })
}
