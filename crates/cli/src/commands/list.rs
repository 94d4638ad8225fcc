// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use chrono::{DateTime, Utc};
use hf_core::{EvalContext, FilterExpr, Issue, MetaQualifierInfo, Model};
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_issue_line, IssueJson};
use crate::error::Result;

use super::{expand_saved, Project};

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    issues: Vec<IssueJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

pub fn run(input: &str, format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let project = Project::open()?;
    let input = expand_saved(input, &project.config)?;
    let expr = crate::time_phase!("filter::parse", { hf_core::parse(&input)? });
    let model = project.load_model()?;

    let issues = crate::time_phase!("filter::select", {
        select(&expr, &model, Utc::now(), limit)?
    });
    render(
        &expr,
        &issues,
        format,
        limit,
        &mut std::io::stdout().lock(),
        colors::should_colorize(),
    )
}

/// Issues of `model` matching `expr`, ordered by its `sort:` keys.
///
/// Without sort keys the model's own order is kept.
pub(crate) fn select<'m>(
    expr: &FilterExpr,
    model: &'m Model,
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> Result<Vec<&'m Issue>> {
    let info = MetaQualifierInfo::from_expr(expr)?;
    let remainder = expr.filter(|q| !q.is_meta());
    let ctx = EvalContext {
        model,
        info: &info,
        now,
    };

    let mut issues: Vec<&Issue> = model
        .issues
        .iter()
        .filter(|issue| remainder.is_satisfied_by(issue, &ctx))
        .collect();
    debug!(filter = %expr, matched = issues.len(), total = model.issues.len(), "selected issues");

    issues.sort_by(|a, b| info.compare(a, b));
    if let Some(n) = limit {
        issues.truncate(n);
    }
    Ok(issues)
}

pub(crate) fn render(
    expr: &FilterExpr,
    issues: &[&Issue],
    format: OutputFormat,
    limit: Option<usize>,
    out: &mut impl Write,
    colorize: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for issue in issues {
                writeln!(out, "{}", format_issue_line(issue, colorize))?;
            }
        }
        OutputFormat::Id => {
            for issue in issues {
                writeln!(out, "{}", issue.id)?;
            }
        }
        OutputFormat::Json => {
            let output = ListOutputJson {
                issues: issues.iter().map(|i| IssueJson::from(*i)).collect(),
                filter: (!expr.is_empty()).then(|| expr.to_string()),
                limit,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
