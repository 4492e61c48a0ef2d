//! td - Task List Library
//!
//! This library provides the core functionality for the td CLI tool,
//! a single-user todo list with validated titles and file persistence.
//!
//! # Core Concepts
//!
//! - **Tasks**: Short titled entries with a done flag, newest first
//! - **Validation**: Length, character set, and duplicate rules gating
//!   every new title
//! - **Commands**: Five pure list transitions applied by a reducer
//! - **Persistence Sync**: One JSON blob under a fixed key, written after
//!   every command and read once at startup
//!
//! # Module Organization
//!
//! - `app`: Wires the task store to persistence and dispatches commands
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `kv`: String key-value store backed by files, plus an in-memory variant
//! - `output`: Human and JSON output envelopes
//! - `sync`: Persistence between the task list and the key-value store
//! - `task`: Task data model and the command reducer
//! - `validate`: Title validation rules

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod kv;
pub mod output;
pub mod sync;
pub mod task;
pub mod validate;

pub use error::{Error, Result};
