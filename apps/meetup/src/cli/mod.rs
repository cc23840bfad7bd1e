//! # Meetup CLI Module
//!
//! This module implements the CLI interface for meetup.
//!
//! ## Available Commands
//!
//! - `meet` - Run meetup rounds over a roster file
//! - `summary` - Count agents per status in a roster file
//! - `table` - Show the encounter table
//! - `morse` - Convert a text file to Morse code

mod commands;

use crate::config::MeetupConfig;
use clap::{Parser, Subcommand};
use meetup_core::MeetupError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Meetup - pairwise agent meetups
///
/// Agents with a health status meet in pairs and change condition
/// according to a fixed table.
#[derive(Parser, Debug)]
#[command(name = "meetup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./meetup.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run meetup rounds over a roster
    Meet {
        /// Path to the roster file
        #[arg(short, long)]
        file: PathBuf,

        /// Roster format (json, text)
        #[arg(short = 't', long)]
        format: Option<String>,

        /// Number of rounds to run
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Count agents per status
    Summary {
        /// Path to the roster file
        #[arg(short, long)]
        file: PathBuf,

        /// Roster format (json, text)
        #[arg(short = 't', long)]
        format: Option<String>,
    },

    /// Show the encounter table
    Table,

    /// Convert a text file to Morse code
    Morse {
        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND RESOLUTION
// =============================================================================

/// A command with every optional flag filled in from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Meet {
        file: PathBuf,
        format: String,
        rounds: usize,
    },
    Summary {
        file: PathBuf,
        format: String,
    },
    Table,
    Morse {
        input: PathBuf,
        output: PathBuf,
    },
}

impl Action {
    /// Merge parsed flags with the config. Flags given on the command line win.
    #[must_use]
    pub fn resolve(command: Option<Commands>, config: MeetupConfig) -> Self {
        match command {
            Some(Commands::Meet {
                file,
                format,
                rounds,
            }) => Action::Meet {
                file,
                format: format.unwrap_or(config.roster.format),
                rounds: rounds.unwrap_or(config.roster.rounds),
            },
            Some(Commands::Summary { file, format }) => Action::Summary {
                file,
                format: format.unwrap_or(config.roster.format),
            },
            Some(Commands::Morse { input, output }) => Action::Morse {
                input: input.unwrap_or(config.morse.input),
                output: output.unwrap_or(config.morse.output),
            },
            Some(Commands::Table) | None => Action::Table,
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), MeetupError> {
    let config = MeetupConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match Action::resolve(cli.command, config) {
        Action::Meet {
            file,
            format,
            rounds,
        } => cmd_meet(&file, &format, rounds, json_mode),
        Action::Summary { file, format } => cmd_summary(&file, &format, json_mode),
        Action::Morse { input, output } => cmd_morse(&input, &output, json_mode),
        Action::Table => cmd_table(json_mode),
    }
}
