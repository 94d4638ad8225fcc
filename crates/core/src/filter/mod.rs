// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter language.
//!
//! A filter is a sequence of terms combined with boolean connectives:
//!
//! ```text
//! milestone:v1.0 label:bug -is:pr created:>2020-01-01
//! ```
//!
//! # Terms
//!
//! - `word` or `"quoted words"` - search titles and bodies
//! - `name:content` - a qualifier such as `label:bug` or `updated:<24`
//! - `name:a;b` - shorthand for `name:a OR name:b`
//!
//! # Connectives
//!
//! - `a b`, `a AND b`, `a & b` - both
//! - `a OR b`, `a | b` - either
//! - `-a`, `~a`, `!a`, `NOT a` - negation
//! - `( ... )` - grouping
//!
//! # Content
//!
//! - Text: `bug`, `"two words"`
//! - Number: `12`; ranges `1 .. 5`, `3 .. *`, `<24`, `>=3`
//! - Date: `2020-01-01`; ranges `2020-01-01 .. 2020-12-31`, `>2020-01-01`
//! - Sort keys: `sort:~updated,id`
//!
//! # Evaluation and application
//!
//! [`process`] tests a filter against one issue. `in:` and `sort:` are
//! meta-qualifiers and are stripped before the test. [`FilterExpr::apply_to`]
//! instead changes an issue so that it satisfies the filter.

mod apply;
mod eval;
mod expr;
mod lexer;
mod meta;
mod parser;
mod qualifier;
mod range;
mod sort;

pub use eval::{process, EvalContext};
pub use expr::FilterExpr;
pub use lexer::{lex, Lexer, Token, TokenType};
pub use meta::MetaQualifierInfo;
pub use parser::{check, is_incomplete, parse, CheckResult};
pub use qualifier::{Qualifier, QualifierContent, QualifierType, SortKey};
pub use range::{DateRange, NumberRange, Range};
pub use sort::compare_issues;
