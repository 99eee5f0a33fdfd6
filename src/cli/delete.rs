use chrono::Local;
use std::path::PathBuf;

use crate::error::Result;
use crate::recorder::{Recorder, Target};
use crate::renderer::entry_line;

/// Remove a recent entry, picked from a menu or addressed by `offset`
pub fn run(config_path: Option<PathBuf>, offset: Option<usize>) -> Result<()> {
    let (config, store) = super::open(config_path)?;
    let target = offset.map_or(Target::Select, Target::Offset);

    let mut prompter = super::terminal_prompter();
    let mut recorder = Recorder::new(&store, &config, &mut prompter);
    let removed = recorder.delete(target, Local::now().naive_local())?;

    if offset.is_some() {
        println!("{}", entry_line(&removed));
    }
    println!("Deleted successfully");
    Ok(())
}
