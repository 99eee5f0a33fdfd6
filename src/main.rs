mod cli;
mod config;
mod display;
mod error;
mod models;
mod prompt;
mod recorder;
mod renderer;
mod store;

use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use crate::error::StudyLogError;

#[derive(Parser)]
#[command(name = "studylog")]
#[command(about = "Record and summarize minutes spent studying", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./studylog.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a study session
    Create {
        /// Date of the session (YYYY-MM-DD, within the last week)
        #[arg(long)]
        date: Option<String>,

        /// Genre of the session
        #[arg(long)]
        genre: Option<String>,

        /// Study time in minutes
        #[arg(long)]
        minutes: Option<String>,
    },
    /// Print total study time per genre
    Show {
        /// Print totals per day instead
        #[arg(short, long)]
        daily: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a recent entry
    Edit {
        /// Edit the Nth most recent entry (0 = newest) instead of choosing
        #[arg(long)]
        offset: Option<usize>,

        /// New date (YYYY-MM-DD, within the last week)
        #[arg(long)]
        date: Option<String>,

        /// New genre
        #[arg(long)]
        genre: Option<String>,

        /// New study time in minutes
        #[arg(long)]
        minutes: Option<String>,
    },
    /// Delete a recent entry
    Delete {
        /// Delete the Nth most recent entry (0 = newest) instead of choosing
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize studylog.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config;
    let result = match cli.command {
        Some(Commands::Create {
            date,
            genre,
            minutes,
        }) => cli::create::run(config, date, genre, minutes),
        Some(Commands::Show { daily, json }) => cli::show::run(config, daily, json),
        Some(Commands::Edit {
            offset,
            date,
            genre,
            minutes,
        }) => cli::edit::run(config, offset, date, genre, minutes),
        Some(Commands::Delete { offset }) => cli::delete::run(config, offset),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Some(Commands::Other(args)) => {
            debug!("unrecognized command {:?}, showing report", args);
            cli::show::run(config, false, false)
        }
        None => cli::show::run(config, false, false),
    };

    match result {
        Ok(()) => {}
        Err(StudyLogError::NoRows) => {
            debug!("no entries to act on");
            std::process::exit(1);
        }
        Err(StudyLogError::SelectionCancelled) => {
            println!("cancelled");
            std::process::exit(1);
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
