// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter expressions against issues.

use chrono::{DateTime, Utc};
use tracing::trace;

use super::expr::FilterExpr;
use super::meta::MetaQualifierInfo;
use super::qualifier::{Qualifier, QualifierContent, QualifierType};
use super::range::NumberRange;
use crate::error::Result;
use crate::issue::{contains_ignore_case, Issue, Label};
use crate::model::Model;

/// Everything evaluation needs besides the issue itself.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// Used for `parent:` ancestor chains and author display names.
    pub model: &'a Model,
    pub info: &'a MetaQualifierInfo,
    /// Reference time for `updated:`.
    pub now: DateTime<Utc>,
}

/// Evaluates `expr` against one issue.
///
/// Meta-qualifiers are collected first and then removed from the tree, so
/// `in:title crash` searches titles for "crash" and `sort:id` never affects
/// which issues match.
pub fn process(expr: &FilterExpr, model: &Model, issue: &Issue, now: DateTime<Utc>) -> Result<bool> {
    let info = MetaQualifierInfo::from_expr(expr)?;
    let remainder = expr.filter(|q| !q.is_meta());
    let ctx = EvalContext {
        model,
        info: &info,
        now,
    };
    let matched = remainder.is_satisfied_by(issue, &ctx);
    trace!(issue = issue.id, matched, "evaluated filter");
    Ok(matched)
}

impl FilterExpr {
    pub fn is_satisfied_by(&self, issue: &Issue, ctx: &EvalContext<'_>) -> bool {
        match self {
            FilterExpr::Qualifier(q) => q.is_satisfied_by(issue, ctx),
            FilterExpr::Conjunction(left, right) => {
                left.is_satisfied_by(issue, ctx) && right.is_satisfied_by(issue, ctx)
            }
            FilterExpr::Disjunction(left, right) => {
                left.is_satisfied_by(issue, ctx) || right.is_satisfied_by(issue, ctx)
            }
            FilterExpr::Negation(inner) => !inner.is_satisfied_by(issue, ctx),
        }
    }
}

/// Parses `#12` or `12` as an issue number.
pub(crate) fn parse_issue_id(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    digits.parse().ok()
}

impl Qualifier {
    /// Tests the issue against this qualifier.
    ///
    /// Meta-qualifiers are satisfied by every issue; their effect reaches
    /// evaluation through the context instead.
    pub fn is_satisfied_by(&self, issue: &Issue, ctx: &EvalContext<'_>) -> bool {
        match self.kind() {
            QualifierType::Empty | QualifierType::In | QualifierType::Sort => true,
            QualifierType::False => false,
            QualifierType::Id => self.id_satisfies(issue),
            QualifierType::Keyword => self.keyword_satisfies(issue, ctx.info),
            QualifierType::Title => self.text_satisfies(&issue.title),
            QualifierType::Body => self.text_satisfies(&issue.body),
            QualifierType::Milestone => issue
                .milestone
                .as_ref()
                .is_some_and(|m| self.text_satisfies(&m.title)),
            QualifierType::Parent => self.parent_satisfies(issue, ctx.model),
            QualifierType::Label => self.label_satisfies(issue),
            QualifierType::Author => self.author_satisfies(issue, ctx.model),
            QualifierType::Assignee => self.assignee_satisfies(issue),
            QualifierType::Involves => {
                self.author_satisfies(issue, ctx.model) || self.assignee_satisfies(issue)
            }
            QualifierType::Type => self.type_satisfies(issue),
            QualifierType::State => self.state_satisfies(issue),
            QualifierType::Has => self.has_satisfies(issue),
            QualifierType::No => self.content().as_text().is_some() && !self.has_satisfies(issue),
            QualifierType::Is => self.is_satisfies(issue),
            QualifierType::Created => self.created_satisfies(issue),
            QualifierType::Updated => self.updated_satisfies(issue, ctx.now),
        }
    }

    /// Lower-cased text content, if the content is textual.
    fn needle(&self) -> Option<String> {
        self.content().as_text().map(|t| t.to_lowercase())
    }

    fn text_satisfies(&self, haystack: &str) -> bool {
        self.needle()
            .is_some_and(|needle| contains_ignore_case(haystack, &needle))
    }

    fn id_satisfies(&self, issue: &Issue) -> bool {
        let id = i64::from(issue.id);
        match self.content() {
            QualifierContent::Number(n) => id == *n,
            QualifierContent::NumberRange(range) => range.encloses(id),
            QualifierContent::Text(text) => parse_issue_id(text) == Some(issue.id),
            _ => false,
        }
    }

    fn keyword_satisfies(&self, issue: &Issue, info: &MetaQualifierInfo) -> bool {
        match info.in_field() {
            Some("title") => self.text_satisfies(&issue.title),
            Some("body" | "desc" | "description") => self.text_satisfies(&issue.body),
            Some(_) => false,
            None => self.text_satisfies(&issue.title) || self.text_satisfies(&issue.body),
        }
    }

    fn parent_satisfies(&self, issue: &Issue, model: &Model) -> bool {
        let parent = match self.content() {
            QualifierContent::Number(n) => u32::try_from(*n).ok(),
            QualifierContent::Text(text) => parse_issue_id(text),
            _ => None,
        };
        parent.is_some_and(|p| issue.id == p || model.has_ancestor(issue, p))
    }

    /// `label:name`, `label:group.name` or `label:group.`; each part is a
    /// substring test and an empty part matches anything.
    fn label_satisfies(&self, issue: &Issue) -> bool {
        let Some(needle) = self.needle() else {
            return false;
        };
        let (group, name) = match Label::parse_name(&needle) {
            Some((group, name, _)) => (Some(group), name),
            None => (None, needle.as_str()),
        };

        issue.labels.iter().any(|label| {
            let group_matches = match (group, label.group()) {
                (None, _) => true,
                (Some(wanted), Some(actual)) => contains_ignore_case(actual, wanted),
                (Some(_), None) => false,
            };
            group_matches && contains_ignore_case(label.name(), name)
        })
    }

    fn author_satisfies(&self, issue: &Issue, model: &Model) -> bool {
        let Some(needle) = self.needle() else {
            return false;
        };
        contains_ignore_case(&issue.author, &needle)
            || model
                .user(&issue.author)
                .is_some_and(|user| user.matches(&needle))
    }

    fn assignee_satisfies(&self, issue: &Issue) -> bool {
        let Some(needle) = self.needle() else {
            return false;
        };
        issue
            .assignee
            .as_ref()
            .is_some_and(|user| user.matches(&needle))
    }

    fn type_satisfies(&self, issue: &Issue) -> bool {
        match self.needle().as_deref() {
            Some("issue") => !issue.is_pull_request(),
            Some("pr" | "pullrequest") => issue.is_pull_request(),
            _ => false,
        }
    }

    fn state_satisfies(&self, issue: &Issue) -> bool {
        match self.needle() {
            Some(state) if state.contains("open") => issue.is_open(),
            Some(state) if state.contains("closed") => !issue.is_open(),
            _ => false,
        }
    }

    fn has_satisfies(&self, issue: &Issue) -> bool {
        match self.needle().as_deref() {
            Some("label" | "labels") => !issue.labels.is_empty(),
            Some("milestone" | "milestones") => issue.milestone.is_some(),
            Some("assignee" | "assignees") => issue.assignee.is_some(),
            Some("parent" | "parents") => issue.parent.is_some(),
            _ => false,
        }
    }

    fn is_satisfies(&self, issue: &Issue) -> bool {
        match self.needle().as_deref() {
            Some("open" | "closed") => self.state_satisfies(issue),
            Some("pr" | "issue") => self.type_satisfies(issue),
            Some("merged") => issue.is_pull_request() && !issue.is_open(),
            Some("unmerged") => issue.is_pull_request() && issue.is_open(),
            _ => false,
        }
    }

    fn created_satisfies(&self, issue: &Issue) -> bool {
        let created = issue.created_at.date_naive();
        match self.content() {
            QualifierContent::Date(date) => created == *date,
            QualifierContent::DateRange(range) => range.encloses(created),
            _ => false,
        }
    }

    /// Compares whole hours since the last update. A bare `N` means `<N`.
    fn updated_satisfies(&self, issue: &Issue, now: DateTime<Utc>) -> bool {
        let hours = (now - issue.updated_at).num_hours();
        match self.content() {
            QualifierContent::NumberRange(range) => range.encloses(hours),
            QualifierContent::Number(n) => NumberRange::below(*n, true).encloses(hours),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
