use chrono::Local;
use std::path::PathBuf;

use crate::error::Result;
use crate::recorder::{Recorder, Target};

/// Rewrite a recent entry, picked from a menu or addressed by `offset`
pub fn run(
    config_path: Option<PathBuf>,
    offset: Option<usize>,
    date: Option<String>,
    genre: Option<String>,
    minutes: Option<String>,
) -> Result<()> {
    let (config, store) = super::open(config_path)?;
    let input = super::create::entry_input(date, genre, minutes)?;
    let target = offset.map_or(Target::Select, Target::Offset);

    let mut prompter = super::terminal_prompter();
    let mut recorder = Recorder::new(&store, &config, &mut prompter);
    recorder.edit(target, input, Local::now().naive_local())?;

    println!("Edited successfully!");
    Ok(())
}
