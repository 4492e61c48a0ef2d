//! Command-line interface for td
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in the `todo` submodule.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod todo;

/// td - validated todo lists
///
/// A CLI that keeps a single task list in a file-backed store: add,
/// rename, toggle, delete, and clear completed, with strict title
/// validation in front of every write.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the persisted list (defaults to the platform data dir)
    #[arg(short = 'd', long, global = true, env = "TD_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the top of the list
    Add {
        /// Task title (letters, digits, and spaces)
        title: String,
    },

    /// Delete a task
    Rm {
        /// Title of the task to delete (exact match)
        title: String,
    },

    /// Rename a task, keeping its done state
    Edit {
        /// Current title (exact match)
        title: String,

        /// Replacement title
        new_title: String,
    },

    /// Toggle a task between done and open
    Done {
        /// Title of the task to toggle (exact match)
        title: String,
    },

    /// Remove every completed task
    Clear,

    /// Show the task list
    List,
}

impl Cli {
    /// Effective output mode: the `--json` flag, or the configured default
    /// when the flag is absent. Applies to error envelopes too, so callers
    /// can resolve it before running the command.
    pub fn json_mode(&self) -> bool {
        self.json || todo::configured_json_default(self.data_dir.clone())
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let json = self.json_mode();
        match self.command {
            Commands::Add { title } => todo::run_add(todo::AddOptions {
                title,
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
            Commands::Rm { title } => todo::run_rm(todo::RmOptions {
                title,
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
            Commands::Edit { title, new_title } => todo::run_edit(todo::EditOptions {
                title,
                new_title,
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
            Commands::Done { title } => todo::run_done(todo::DoneOptions {
                title,
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
            Commands::Clear => todo::run_clear(todo::ClearOptions {
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
            Commands::List => todo::run_list(todo::ListOptions {
                data_dir: self.data_dir,
                json,
                quiet: self.quiet,
            }),
        }
    }
}
