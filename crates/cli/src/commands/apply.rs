// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use hf_core::{FilterExpr, Issue, Model};
use tracing::{debug, warn};

use crate::display::format_issue_details;
use crate::error::{Error, Result};

use super::{expand_saved, Project};

/// Result of applying a filter to one issue.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// The issue already satisfied the filter's fields.
    Unchanged,
    Updated(Issue),
}

pub fn run(id: u32, input: &str, dry_run: bool) -> Result<()> {
    let project = Project::open()?;
    let input = expand_saved(input, &project.config)?;
    let expr = crate::time_phase!("filter::parse", { hf_core::parse(&input)? });
    let mut model = project.load_model()?;

    let outcome = crate::time_phase!("filter::apply", { apply(&mut model, id, &expr, !dry_run)? });
    match outcome {
        Outcome::Unchanged => println!("#{} already matches {}", id, expr),
        Outcome::Updated(issue) if dry_run => {
            println!("Would update #{} (dry run)", id);
            println!("{}", format_issue_details(&issue));
        }
        Outcome::Updated(issue) => {
            project.save_model(&model)?;
            println!("Updated #{}", id);
            println!("{}", format_issue_details(&issue));
        }
    }
    Ok(())
}

/// Applies `expr` to issue `id`, writing the result back into `model` when
/// `commit` is set.
pub(crate) fn apply(model: &mut Model, id: u32, expr: &FilterExpr, commit: bool) -> Result<Outcome> {
    if expr.is_empty() {
        return Err(Error::NotApplicable("the filter is empty".to_string()));
    }
    let before = model.issue(id).cloned().ok_or(Error::IssueNotFound(id))?;
    if !expr.can_be_applied() {
        return Err(inapplicable(expr, &before, model));
    }

    let mut issue = before.clone();
    expr.apply_to(&mut issue, model)?;

    if issue == before {
        debug!(id, filter = %expr, "issue already matches");
        return Ok(Outcome::Unchanged);
    }

    if !hf_core::process(expr, model, &issue, Utc::now())? {
        warn!(id, filter = %expr, "applied issue still does not match the filter");
    }

    if commit {
        *model.issue_mut(id)? = issue.clone();
    }
    debug!(id, filter = %expr, commit, "applied filter");
    Ok(Outcome::Updated(issue))
}

/// Explains why `expr` cannot be applied.
///
/// For a plain conjunction the first qualifier that cannot be applied is
/// asked to apply itself, which fails with its own reason (`id is
/// immutable`, an ambiguous `is:` and so on).
fn inapplicable(expr: &FilterExpr, issue: &Issue, model: &Model) -> Error {
    if is_plain_conjunction(expr) {
        for q in expr.qualifiers() {
            if q.can_be_applied() {
                continue;
            }
            if let Err(e) = q.apply_to(&mut issue.clone(), model) {
                return e.into();
            }
        }
    }
    Error::NotApplicable(expr.to_string())
}

fn is_plain_conjunction(expr: &FilterExpr) -> bool {
    match expr {
        FilterExpr::Qualifier(_) => true,
        FilterExpr::Conjunction(left, right) => {
            is_plain_conjunction(left) && is_plain_conjunction(right)
        }
        FilterExpr::Disjunction(..) | FilterExpr::Negation(..) => false,
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
