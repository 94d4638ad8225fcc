// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hf-core operations.

use thiserror::Error;

/// All possible errors that can occur in hf-core operations.
///
/// Variants fall into three families that callers treat differently:
/// parse errors (the filter string is rejected), application errors (an
/// issue could not be changed to satisfy a filter) and semantic errors
/// (the filter parsed but means nothing sensible).
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error at {offset}: {message}")]
    Parse { message: String, offset: usize },

    #[error("input unexpectedly ended at position {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unrecognised token '{ch}' at {offset}")]
    UnrecognisedToken { ch: char, offset: usize },

    #[error("unnecessary filter: {reason}")]
    Immutable { reason: &'static str },

    #[error("ambiguous filter: {reason}")]
    AmbiguousQualifier { reason: String },

    #[error("ambiguous filter: can apply any of the following {field}: {}", candidates.join(", "))]
    AmbiguousMatch {
        field: &'static str,
        candidates: Vec<String>,
    },

    #[error("invalid {field} '{query}'\n  hint: nothing in the model matches")]
    NoMatch { field: &'static str, query: String },

    #[error("invalid content for {field}: {content}")]
    InvalidContent { field: &'static str, content: String },

    #[error("semantic error: {0}")]
    Semantic(String),

    #[error("invalid state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("invalid issue kind: '{0}'\n  hint: valid kinds are: issue, pr")]
    InvalidKind(String),

    #[error("issue not found: #{0}")]
    IssueNotFound(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors raised while lexing or parsing a filter.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::UnexpectedEnd { .. } | Error::UnrecognisedToken { .. }
        )
    }

    /// Returns true for errors raised while applying a filter to an issue.
    pub fn is_application_error(&self) -> bool {
        matches!(
            self,
            Error::Immutable { .. }
                | Error::AmbiguousQualifier { .. }
                | Error::AmbiguousMatch { .. }
                | Error::NoMatch { .. }
                | Error::InvalidContent { .. }
        )
    }

    /// Source offset of a parse error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { offset, .. }
            | Error::UnexpectedEnd { offset }
            | Error::UnrecognisedToken { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// A specialized Result type for hf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
