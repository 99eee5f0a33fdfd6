//! Command-line interface module
//!
//! One function per subcommand:
//! - create: Record a study session
//! - show: Print the genre or daily report
//! - edit: Rewrite a recent entry
//! - delete: Remove a recent entry
//! - config init: Write a default studylog.toml
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod show;

use std::io::{self, StdinLock, Stdout};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::prompt::TerminalPrompter;
use crate::store::Store;

/// Load the configuration and open its database
fn open(config_path: Option<PathBuf>) -> Result<(Config, Store)> {
    let config = crate::config::resolve(config_path)?;
    let store = Store::open(&config.database)?;
    Ok((config, store))
}

fn terminal_prompter() -> TerminalPrompter<StdinLock<'static>, Stdout> {
    TerminalPrompter::new(io::stdin().lock(), io::stdout())
}
