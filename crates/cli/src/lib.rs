// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hfrs - the library behind the `hf` command.
//!
//! `hf` evaluates GitHub-style issue filters (`is:open label:bug sort:~updated`)
//! against a JSON model of issues, and applies filters to issues so that they
//! match. The filter engine itself lives in `hf-core`; this crate provides the
//! command-line front end.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (model location, saved filters)
//! - [`Cli`] / [`Command`] - clap command definitions
//! - [`run`] - Dispatches a parsed command
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use hfrs::{init_work_dir, find_work_dir, Config};
//!
//! let work_dir = init_work_dir(Path::new("."), "model.json")?;
//!
//! // Later, find an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let model = hf_core::Model::load(&config.model_path(&work_dir))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
pub mod timings;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, LimitArgs, OutputFormat, SavedCommand};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a CLI command.
///
/// This is the main entry point for executing commands after parsing.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List {
            filter,
            output,
            limits,
        } => commands::list::run(&filter.joined(), output, limits.limit),
        Command::Apply {
            id,
            filter,
            dry_run,
        } => commands::apply::run(id, &filter.joined(), dry_run),
        Command::Check { filter } => commands::check::run(&filter.joined()),
        Command::Tokens { filter } => commands::tokens::run(&filter.joined()),
        Command::Saved(cmd) => commands::saved::run(cmd),
        Command::Qualifiers => commands::qualifiers::run(),
        Command::Init { model, path } => commands::init::run(model, path),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hf", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
