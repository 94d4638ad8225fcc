// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applying a filter to an issue: changing the issue so it satisfies the
//! filter.
//!
//! Only qualifiers that name one mutable field can be applied. Partial text
//! is resolved against the model, so `milestone:v1` picks the one milestone
//! whose title contains "v1".

use tracing::debug;

use super::eval::parse_issue_id;
use super::expr::FilterExpr;
use super::qualifier::{Qualifier, QualifierType};
use crate::error::{Error, Result};
use crate::issue::{Issue, State};
use crate::model::Model;

impl FilterExpr {
    /// Changes `issue` so that it satisfies this filter.
    ///
    /// A conjunction is applied to a copy first, so on error the issue is
    /// left untouched.
    ///
    /// # Panics
    ///
    /// Disjunctions and negations cannot be applied; check
    /// [`FilterExpr::can_be_applied`] first.
    pub fn apply_to(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        match self {
            FilterExpr::Qualifier(q) => q.apply_to(issue, model),
            FilterExpr::Conjunction(left, right) => {
                let mut staged = issue.clone();
                left.apply_to(&mut staged, model)?;
                right.apply_to(&mut staged, model)?;
                *issue = staged;
                Ok(())
            }
            FilterExpr::Disjunction(..) | FilterExpr::Negation(..) => {
                unreachable!("apply_to called on a filter that cannot be applied")
            }
        }
    }
}

impl Qualifier {
    pub fn can_be_applied(&self) -> bool {
        self.kind().is_applicable()
    }

    /// Sets the field this qualifier names.
    pub fn apply_to(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        match self.kind() {
            QualifierType::Empty | QualifierType::In | QualifierType::Sort => Ok(()),
            QualifierType::Keyword | QualifierType::Title | QualifierType::Body => {
                Err(Error::Immutable {
                    reason: "issue text cannot be changed by dragging",
                })
            }
            QualifierType::Id => Err(Error::Immutable {
                reason: "id is immutable",
            }),
            QualifierType::Created => Err(Error::Immutable {
                reason: "cannot change issue creation date",
            }),
            QualifierType::Updated => Err(Error::Immutable {
                reason: "cannot change issue update time",
            }),
            QualifierType::Author => Err(Error::Immutable {
                reason: "cannot change author of issue",
            }),
            QualifierType::Type => Err(Error::Immutable {
                reason: "cannot change the type of an issue",
            }),
            QualifierType::Has | QualifierType::No | QualifierType::Is => {
                Err(Error::AmbiguousQualifier {
                    reason: self.name().to_string(),
                })
            }
            QualifierType::Involves => Err(Error::AmbiguousQualifier {
                reason: "cannot change users involved with issue".to_string(),
            }),
            QualifierType::False => Err(Error::InvalidContent {
                field: "qualifier",
                content: self.name().to_string(),
            }),
            QualifierType::Milestone => self.apply_milestone(issue, model),
            QualifierType::Label => self.apply_label(issue, model),
            QualifierType::Assignee => self.apply_assignee(issue, model),
            QualifierType::State => self.apply_state(issue),
            QualifierType::Parent => self.apply_parent(issue, model),
        }
    }

    fn text_content(&self, field: &'static str) -> Result<String> {
        self.content()
            .as_text()
            .ok_or_else(|| Error::InvalidContent {
                field,
                content: self.content().to_string(),
            })
    }

    fn apply_milestone(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        let query = self.text_content("milestone")?;
        let milestone = resolve("milestones", &query, &model.milestones, |m| &m.title)?;
        debug!(issue = issue.id, milestone = %milestone.title, "applying milestone");
        issue.milestone = Some(milestone.clone());
        Ok(())
    }

    fn apply_label(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        let query = self.text_content("label")?;
        let label = resolve("labels", &query, &model.labels, |l| &l.full_name)?;
        debug!(issue = issue.id, label = %label, "applying label");
        issue.add_label(label.clone());
        Ok(())
    }

    fn apply_assignee(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        let query = self.text_content("assignee")?;
        let user = resolve("assignees", &query, &model.users, |u| &u.login)?;
        debug!(issue = issue.id, assignee = %user.login, "applying assignee");
        issue.assignee = Some(user.clone());
        Ok(())
    }

    fn apply_state(&self, issue: &mut Issue) -> Result<()> {
        let state = self.text_content("state")?.to_lowercase();
        issue.state = if state.contains("open") {
            State::Open
        } else if state.contains("closed") {
            State::Closed
        } else {
            return Err(Error::InvalidContent {
                field: "state",
                content: state,
            });
        };
        Ok(())
    }

    /// `parent:12` or `parent:#12` sets the id directly; other text is
    /// resolved against issue titles in the model.
    fn apply_parent(&self, issue: &mut Issue, model: &Model) -> Result<()> {
        let query = self.text_content("parent")?;
        let parent = match parse_issue_id(&query) {
            Some(id) => id,
            None => {
                let others: Vec<&Issue> =
                    model.issues.iter().filter(|i| i.id != issue.id).collect();
                resolve("parents", &query, &others, |i| &i.title)?.id
            }
        };
        let Some(target) = model.issue(parent) else {
            return Err(Error::NoMatch {
                field: "parents",
                query,
            });
        };
        if parent == issue.id || model.has_ancestor(target, issue.id) {
            return Err(Error::InvalidContent {
                field: "parent",
                content: query,
            });
        }
        issue.parent = Some(parent);
        Ok(())
    }
}

/// Picks the one candidate whose key contains `query`, ignoring case.
///
/// When several contain it, a single exact match still wins.
fn resolve<'m, T>(
    field: &'static str,
    query: &str,
    candidates: &'m [T],
    key: impl Fn(&T) -> &str,
) -> Result<&'m T> {
    let needle = query.to_lowercase();
    let partial: Vec<&T> = candidates
        .iter()
        .filter(|c| key(c).to_lowercase().contains(&needle))
        .collect();

    match partial.as_slice() {
        [] => Err(Error::NoMatch {
            field,
            query: query.to_string(),
        }),
        [only] => Ok(*only),
        many => {
            let exact: Vec<&&T> = many
                .iter()
                .filter(|c| key(c).to_lowercase() == needle)
                .collect();
            match exact.as_slice() {
                [only] => Ok(**only),
                _ => Err(Error::AmbiguousMatch {
                    field,
                    candidates: many.iter().map(|c| key(c).to_string()).collect(),
                }),
            }
        }
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
