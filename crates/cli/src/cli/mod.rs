// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, LimitArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "hf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Query and reshape issues with a GitHub-style filter language")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if hf was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// List issues matching a filter
    #[command(after_help = format!("{}\n\n{}", colors::examples("\
Examples:
  hf list                           List every issue
  hf list is:open label:bug         List open bugs
  hf list \"crash in:title\"          Search titles only
  hf list sort:~updated -n 5        Five most recently updated issues
  hf list @mine -o id               Saved filter, ids only"), help::filter_syntax()))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Change an issue so that it matches a filter
    #[command(after_help = colors::examples("\
Examples:
  hf apply 12 label:type.bug        Label #12 as a bug
  hf apply 12 milestone:v1 is:open  Reopen #12 into milestone v1
  hf apply 12 parent:3 --dry-run    Show the result without saving"))]
    Apply {
        /// Issue number
        id: u32,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print the updated issue without saving the model
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a filter and print its canonical form
    #[command(after_help = help::filter_syntax())]
    Check {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the tokens a filter is made of
    Tokens {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Manage saved filters
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Show recognised qualifiers and their valid inputs
    Qualifiers,

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a project in the current directory (or specified path)
    #[command(after_help = colors::examples("\
Examples:
  hf init                           Use ./model.json
  hf init --model data/issues.json  Use a model elsewhere in the project"))]
    Init {
        /// Model file, relative to the project root
        #[arg(long, default_value = "model.json")]
        model: String,

        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  hf completions bash > ~/.local/share/bash-completion/completions/hf
  hf completions zsh > ~/.zfunc/_hf"))]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SavedCommand {
    /// Save a filter under a name
    Add {
        /// Name to save under
        name: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Replace an existing filter with the same name
        #[arg(long, short)]
        force: bool,
    },

    /// Remove a saved filter
    #[command(alias = "rm")]
    Remove {
        /// Name of the saved filter
        name: String,
    },

    /// List saved filters
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
