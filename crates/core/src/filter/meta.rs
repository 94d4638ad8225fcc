// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Meta-qualifiers: `in:` and `sort:`.
//!
//! These do not test an issue themselves. `in:` restricts which fields bare
//! keywords search, and `sort:` orders the matching issues. They are pulled
//! out of the tree before evaluation and carried alongside it.

use std::cmp::Ordering;

use tracing::trace;

use super::expr::FilterExpr;
use super::qualifier::{Qualifier, QualifierContent, QualifierType, SortKey};
use super::sort;
use crate::error::{Error, Result};
use crate::issue::Issue;

/// Effects of the meta-qualifiers found in one filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaQualifierInfo {
    in_field: Option<String>,
    sort_keys: Vec<SortKey>,
}

impl MetaQualifierInfo {
    /// Collects meta-qualifier effects.
    ///
    /// At most one `in:` is allowed and it must have text content.
    /// Keys from several `sort:` qualifiers are concatenated in order.
    pub fn new(qualifiers: &[&Qualifier]) -> Result<Self> {
        let mut info = MetaQualifierInfo::default();
        for q in qualifiers {
            match (q.kind(), q.content()) {
                (QualifierType::In, _) if info.in_field.is_some() => {
                    return Err(Error::Semantic(
                        "more than one in: qualifier".to_string(),
                    ));
                }
                (QualifierType::In, QualifierContent::Text(field)) => {
                    info.in_field = Some(field.to_lowercase());
                }
                (QualifierType::In, content) => {
                    return Err(Error::Semantic(format!(
                        "in: takes a field name, not {content}"
                    )));
                }
                (QualifierType::Sort, QualifierContent::SortKeys(keys)) => {
                    info.sort_keys.extend(keys.iter().cloned());
                }
                _ => {}
            }
        }
        trace!(in_field = ?info.in_field, sort_keys = info.sort_keys.len(), "meta qualifiers");
        Ok(info)
    }

    /// Collects the meta-qualifiers of `expr`.
    pub fn from_expr(expr: &FilterExpr) -> Result<Self> {
        MetaQualifierInfo::new(&expr.find(Qualifier::is_meta))
    }

    /// The field named by `in:`, lower-cased.
    pub fn in_field(&self) -> Option<&str> {
        self.in_field.as_deref()
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Orders two issues by the `sort:` keys. Equal when there are none.
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        sort::compare_issues(&self.sort_keys, a, b)
    }
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
