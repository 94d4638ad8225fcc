// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hf-core: filter query engine for issue trackers
//!
//! This crate provides the issue data model and the filter language used by
//! the hf CLI: lexing, parsing, evaluation against issues, and application
//! of a filter to an issue so that it satisfies the filter.

pub mod error;
pub mod filter;
pub mod issue;
pub mod model;

pub use error::{Error, Result};
pub use filter::{
    check, parse, process, CheckResult, EvalContext, FilterExpr, MetaQualifierInfo, Qualifier,
    QualifierContent, QualifierType, SortKey,
};
pub use issue::{Issue, IssueKind, Label, Milestone, State, User};
pub use model::Model;
