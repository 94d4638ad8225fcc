// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the hfrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'hf init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("model not found: {0}\n  hint: set 'model' in .hubfilter/config.toml or create the file")]
    ModelNotFound(String),

    #[error("issue not found: #{0}")]
    IssueNotFound(u32),

    #[error("saved filter not found: '{0}'\n  hint: run 'hf saved list' to see saved filters")]
    SavedFilterNotFound(String),

    #[error("saved filter '{0}' already exists\n  hint: pass --force to replace it")]
    SavedFilterExists(String),

    #[error("invalid filter name: '{0}'\n  hint: names may contain letters, digits, '-' and '_'")]
    InvalidFilterName(String),

    #[error("incomplete filter: {0}")]
    IncompleteFilter(String),

    #[error("filter cannot be applied: {0}\n  hint: only conjunctions with at most one qualifier of each kind (labels excepted) can be applied")]
    NotApplicable(String),

    #[error("{0}")]
    Filter(hf_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for hfrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<hf_core::Error> for Error {
    fn from(e: hf_core::Error) -> Self {
        match e {
            hf_core::Error::IssueNotFound(id) => Error::IssueNotFound(id),
            hf_core::Error::Io(e) => Error::Io(e),
            hf_core::Error::Json(e) => Error::Json(e),
            other => Error::Filter(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
