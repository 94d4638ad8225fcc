// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! takes a filter.

use clap::Args;

/// A filter given as one or more words.
///
/// Words are joined with single spaces, so `hf list is:open label:bug` and
/// `hf list "is:open label:bug"` are the same filter. A leading `-` negation
/// needs `--` first (`hf list -- -label:bug`), or use `!`/`~` instead.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter expression, or @name for a saved filter
    #[arg(value_name = "FILTER")]
    pub filter: Vec<String>,
}

impl FilterArgs {
    pub fn joined(&self) -> String {
        self.filter.join(" ")
    }
}

/// Limit arguments for list results.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
